use chrono::{NaiveDate, NaiveDateTime};

use crate::model::identity::StudentIdentity;
use crate::model::progress::ProgressValue;
use crate::model::skill::SkillRecord;
use crate::model::task::{Difficulty, TaskRecord, TaskStatus};

/// A named course with its completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseProgress {
    pub title: String,
    pub value: ProgressValue,
}

/// Display-only source listing shown in the "latest work" panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnippet {
    pub language: String,
    pub source: String,
}

/// Notices shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPanel {
    pub notices: Vec<String>,
    pub event_at: NaiveDateTime,
    pub status_line: String,
}

/// Everything the dashboard shows, captured once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSnapshot {
    pub identity: StudentIdentity,
    pub skills: Vec<SkillRecord>,
    pub course: CourseProgress,
    pub tasks: Vec<TaskRecord>,
    pub snippet: CodeSnippet,
    pub system: SystemPanel,
}

const SAMPLE_SNIPPET: &str = r"def main():
    # 11x1 inch canvas sized for a single line of text
    plt.figure(figsize=(11, 1))
    plt.axis('off')
    plt.text(0.5, 0.5, 'ACCESS GRANTED',
             fontsize=20,
             ha='center',
             va='center')
    plt.savefig('result.png')
    st.sidebar.image('result.png')
";

impl ProfileSnapshot {
    /// The built-in profile for student Xiao Lu.
    ///
    /// # Panics
    ///
    /// Panics if one of the literal dates is not a valid calendar date.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            identity: StudentIdentity {
                display_name: "Xiao Lu".to_string(),
                student_id: "NO2023-001".to_string(),
                gender: "Male".to_string(),
                registered_on: date(2023, 9, 1),
                wellbeing: "✅ Normal".to_string(),
                access_level: "Secure (basic)".to_string(),
            },
            skills: vec![
                SkillRecord::new("C++", "95%", "+5%"),
                SkillRecord::new("Python", "87%", "-2%"),
                SkillRecord::new("Java", "68%", "-10%"),
            ],
            course: CourseProgress {
                title: "Dioxus course".to_string(),
                value: ProgressValue::new(0.20),
            },
            tasks: vec![
                TaskRecord::new(
                    date(2025, 10, 1),
                    "Student grade system",
                    TaskStatus::Done,
                    Difficulty::new(2),
                ),
                TaskRecord::new(
                    date(2025, 11, 1),
                    "Course management system",
                    TaskStatus::InProgress,
                    Difficulty::new(3),
                ),
                TaskRecord::new(
                    date(2025, 12, 1),
                    "Teacher records entry",
                    TaskStatus::NotDone,
                    Difficulty::new(4),
                ),
            ],
            snippet: CodeSnippet {
                language: "python".to_string(),
                source: SAMPLE_SNIPPET.to_string(),
            },
            system: SystemPanel {
                notices: vec![
                    "✅ Next task target unlocked.".to_string(),
                    "📌 Task: Course management system".to_string(),
                ],
                event_at: date(2023, 12, 12)
                    .and_hms_opt(12, 43, 48)
                    .expect("sample time should be valid"),
                status_line: "System status: online | Authorization: verified".to_string(),
            },
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample date should be valid")
}
