//! Maps a [`ProfileSnapshot`] onto display rows, tables and progress indicators.

use crate::model::{
    CodeSnippet, FormatError, ProfileSnapshot, ProgressValue, SkillRecord, TaskRecord, Trend,
};
use crate::table::{ColumnDescriptor, ColumnWidth, Table};
use crate::theme::ThemeConfig;

/// Identity fields are laid out this many per column.
pub const IDENTITY_FIELDS_PER_COLUMN: usize = 2;

//
// ─── SECTIONS ─────────────────────────────────────────────────────────────────
//

/// Page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Identity,
    Skills,
    Course,
    Tasks,
    Code,
    System,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Identity,
        Self::Skills,
        Self::Course,
        Self::Tasks,
        Self::Code,
        Self::System,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::Identity => "Basic info",
            Section::Skills => "Skill matrix",
            Section::Course => "Course progress",
            Section::Tasks => "Task log",
            Section::Code => "Latest code",
            Section::System => "System messages",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Section::Identity => "📋",
            Section::Skills | Section::Code => "💻",
            Section::Course => "📚",
            Section::Tasks => "📝",
            Section::System => "📢",
        }
    }

    #[must_use]
    pub fn heading(self) -> String {
        format!("{} {}", self.icon(), self.title())
    }
}

//
// ─── DISPLAY ROW ──────────────────────────────────────────────────────────────
//

/// Color hint for a row's caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl Tone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Positive => "success",
            Tone::Negative => "danger",
        }
    }
}

impl From<Trend> for Tone {
    fn from(trend: Trend) -> Self {
        match trend {
            Trend::Up => Tone::Positive,
            Trend::Down => Tone::Negative,
            Trend::Flat => Tone::Neutral,
        }
    }
}

/// One renderable unit: a line of text with an optional progress bar and caption.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayRow {
    pub title: String,
    pub emphasis: bool,
    pub progress: Option<ProgressValue>,
    pub caption: Option<String>,
    pub tone: Tone,
    /// Set when the source value could not be parsed and the row shows 0%.
    pub degraded: bool,
}

impl DisplayRow {
    #[must_use]
    pub fn text(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

//
// ─── CONFIG ───────────────────────────────────────────────────────────────────
//

/// What to do with a skill whose proficiency string is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRowPolicy {
    /// Show the row at 0% and mark it degraded.
    #[default]
    RenderZero,
    /// Leave the row out.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub theme: ThemeConfig,
    pub malformed_rows: MalformedRowPolicy,
}

//
// ─── RENDERED PROFILE ─────────────────────────────────────────────────────────
//

/// The full page, ready for a UI framework or a [`RenderSurface`](crate::surface::RenderSurface).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedProfile {
    pub title: String,
    pub theme: ThemeConfig,
    pub identity_columns: Vec<Vec<DisplayRow>>,
    pub skills: Vec<DisplayRow>,
    pub course: DisplayRow,
    pub tasks: Table,
    pub snippet: CodeSnippet,
    pub system_lines: Vec<String>,
}

//
// ─── RENDERER ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ProfileRenderer {
    snapshot: ProfileSnapshot,
    config: RenderConfig,
}

impl ProfileRenderer {
    #[must_use]
    pub fn new(snapshot: ProfileSnapshot, config: RenderConfig) -> Self {
        Self { snapshot, config }
    }

    #[must_use]
    pub fn snapshot(&self) -> &ProfileSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Bold skill name, proficiency bar and the trend text as written.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the proficiency string is malformed.
    pub fn render_skill_row(record: &SkillRecord) -> Result<DisplayRow, FormatError> {
        let progress = record.progress()?;
        Ok(DisplayRow {
            title: record.name.clone(),
            emphasis: true,
            progress: Some(progress),
            caption: Some(record.trend.clone()),
            tone: record.trend_direction().into(),
            degraded: false,
        })
    }

    /// One row per task, in the order given. The index column is suppressed.
    #[must_use]
    pub fn render_task_table(records: &[TaskRecord]) -> Table {
        let mut table = Table::new(task_columns());
        for record in records {
            table.push_row(vec![
                record.date.format("%Y-%m-%d").to_string(),
                record.title.clone(),
                record.status.display(),
                record.difficulty.stars(),
            ]);
        }
        table
    }

    /// Renders the whole snapshot in one pass. Malformed skill rows follow the
    /// configured [`MalformedRowPolicy`]; they never abort the page.
    #[must_use]
    pub fn render(&self) -> RenderedProfile {
        let snapshot = &self.snapshot;

        let identity_columns: Vec<Vec<DisplayRow>> = snapshot
            .identity
            .fields()
            .chunks(IDENTITY_FIELDS_PER_COLUMN)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|field| DisplayRow::text(format!("{}: {}", field.label, field.value)))
                    .collect()
            })
            .collect();

        let skills = snapshot
            .skills
            .iter()
            .filter_map(|record| self.skill_row_or_fallback(record))
            .collect::<Vec<_>>();

        let course = DisplayRow {
            title: snapshot.course.title.clone(),
            progress: Some(snapshot.course.value),
            caption: Some(format!("{}%", snapshot.course.value.percent())),
            ..DisplayRow::default()
        };

        let mut system_lines = snapshot.system.notices.clone();
        system_lines.push(format!(
            "🕒 Time: {}",
            snapshot.system.event_at.format("%Y-%m-%d %H:%M:%S")
        ));
        system_lines.push(snapshot.system.status_line.clone());

        tracing::debug!(
            skills = skills.len(),
            tasks = snapshot.tasks.len(),
            "rendered profile"
        );

        RenderedProfile {
            title: format!("Student {} - Digital Profile", snapshot.identity.display_name),
            theme: self.config.theme.clone(),
            identity_columns,
            skills,
            course,
            tasks: Self::render_task_table(&snapshot.tasks),
            snippet: snapshot.snippet.clone(),
            system_lines,
        }
    }

    fn skill_row_or_fallback(&self, record: &SkillRecord) -> Option<DisplayRow> {
        match Self::render_skill_row(record) {
            Ok(row) => Some(row),
            Err(err) => {
                tracing::warn!(
                    skill = %record.name,
                    error = %err,
                    policy = ?self.config.malformed_rows,
                    "malformed skill row"
                );
                match self.config.malformed_rows {
                    MalformedRowPolicy::Skip => None,
                    MalformedRowPolicy::RenderZero => Some(DisplayRow {
                        title: record.name.clone(),
                        emphasis: true,
                        progress: Some(ProgressValue::ZERO),
                        caption: Some(record.trend.clone()),
                        tone: record.trend_direction().into(),
                        degraded: true,
                    }),
                }
            }
        }
    }
}

fn task_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("Date"),
        ColumnDescriptor::new("Task").width(ColumnWidth::Large),
        ColumnDescriptor::new("Status")
            .width(ColumnWidth::Small)
            .help("Current task status"),
        ColumnDescriptor::new("Difficulty").width(ColumnWidth::Small),
    ]
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{Difficulty, TaskStatus};

    fn task(day: u32, title: &str) -> TaskRecord {
        TaskRecord::new(
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            title,
            TaskStatus::InProgress,
            Difficulty::new(1),
        )
    }

    fn renderer_with_skills(skills: Vec<SkillRecord>, policy: MalformedRowPolicy) -> ProfileRenderer {
        let mut snapshot = ProfileSnapshot::sample();
        snapshot.skills = skills;
        ProfileRenderer::new(
            snapshot,
            RenderConfig {
                malformed_rows: policy,
                ..RenderConfig::default()
            },
        )
    }

    #[test]
    fn skill_row_has_bold_name_progress_and_verbatim_trend() {
        let row = ProfileRenderer::render_skill_row(&SkillRecord::new("C++", "95%", "+5%")).unwrap();
        assert_eq!(row.title, "C++");
        assert!(row.emphasis);
        assert_eq!(row.progress.unwrap().fraction(), 0.95);
        assert_eq!(row.caption.as_deref(), Some("+5%"));
        assert_eq!(row.tone, Tone::Positive);
        assert!(!row.degraded);
    }

    #[test]
    fn skill_row_propagates_format_error() {
        let err = ProfileRenderer::render_skill_row(&SkillRecord::new("C", "95", "+1%")).unwrap_err();
        assert!(matches!(err, FormatError::MissingPercent { .. }));
    }

    #[test]
    fn sample_skills_render_in_order_with_expected_progress() {
        let renderer = ProfileRenderer::new(ProfileSnapshot::sample(), RenderConfig::default());
        let rendered = renderer.render();
        let progress: Vec<f64> = rendered
            .skills
            .iter()
            .map(|row| row.progress.unwrap().fraction())
            .collect();
        assert_eq!(progress, [0.95, 0.87, 0.68]);
        let tones: Vec<Tone> = rendered.skills.iter().map(|row| row.tone).collect();
        assert_eq!(tones, [Tone::Positive, Tone::Negative, Tone::Negative]);
    }

    #[test]
    fn task_table_preserves_input_order() {
        let table = ProfileRenderer::render_task_table(&[task(3, "A"), task(1, "B"), task(2, "C")]);
        let titles: Vec<&str> = table.rows.iter().map(|row| row[1].as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
        assert!(!table.show_index);
    }

    #[test]
    fn task_table_formats_status_and_stars() {
        let table = ProfileRenderer::render_task_table(&ProfileSnapshot::sample().tasks);
        assert_eq!(
            table.rows[0],
            ["2025-10-01", "Student grade system", "✅ Done", "★★☆☆☆"]
        );
        assert_eq!(table.rows[1][3], "★★★☆☆");
        assert_eq!(table.rows[2][2], "❌ Not done");
        assert_eq!(table.columns[2].help_text.as_deref(), Some("Current task status"));
        assert_eq!(table.columns[3].width, ColumnWidth::Small);
    }

    #[test]
    fn empty_task_list_renders_empty_table_with_columns() {
        let table = ProfileRenderer::render_task_table(&[]);
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 4);
    }

    #[test]
    fn malformed_skill_renders_at_zero_by_default() {
        let renderer = renderer_with_skills(
            vec![
                SkillRecord::new("Rust", "eighty", "+3%"),
                SkillRecord::new("Go", "40%", "0%"),
            ],
            MalformedRowPolicy::RenderZero,
        );
        let rendered = renderer.render();
        assert_eq!(rendered.skills.len(), 2);
        assert!(rendered.skills[0].degraded);
        assert_eq!(rendered.skills[0].progress, Some(ProgressValue::ZERO));
        assert!(!rendered.skills[1].degraded);
    }

    #[test]
    fn malformed_skill_is_dropped_under_skip_policy() {
        let renderer = renderer_with_skills(
            vec![
                SkillRecord::new("Rust", "80", "+3%"),
                SkillRecord::new("Go", "40%", "0%"),
            ],
            MalformedRowPolicy::Skip,
        );
        let rendered = renderer.render();
        assert_eq!(rendered.skills.len(), 1);
        assert_eq!(rendered.skills[0].title, "Go");
    }

    #[test]
    fn identity_fields_fill_three_columns() {
        let rendered = ProfileRenderer::new(ProfileSnapshot::sample(), RenderConfig::default()).render();
        let sizes: Vec<usize> = rendered.identity_columns.iter().map(Vec::len).collect();
        assert_eq!(sizes, [2, 2, 1]);
        assert_eq!(rendered.identity_columns[0][0].title, "Student ID: NO2023-001");
    }

    #[test]
    fn page_chrome_comes_from_snapshot() {
        let rendered = ProfileRenderer::new(ProfileSnapshot::sample(), RenderConfig::default()).render();
        assert_eq!(rendered.title, "Student Xiao Lu - Digital Profile");
        assert_eq!(rendered.course.caption.as_deref(), Some("20%"));
        assert!(rendered.system_lines.contains(&"🕒 Time: 2023-12-12 12:43:48".to_string()));
        assert_eq!(rendered.theme, ThemeConfig::default());
    }

    #[test]
    fn rendering_twice_is_identical() {
        let renderer = ProfileRenderer::new(ProfileSnapshot::sample(), RenderConfig::default());
        assert_eq!(renderer.render(), renderer.render());
    }
}
