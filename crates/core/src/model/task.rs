use chrono::NaiveDate;

//
// ─── STATUS ───────────────────────────────────────────────────────────────────
//

/// Completion state of a logged task.
///
/// Each state has exactly one glyph; the mapping is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Done,
    InProgress,
    NotDone,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Done, Self::InProgress, Self::NotDone];

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            TaskStatus::Done => "✅",
            TaskStatus::InProgress => "●",
            TaskStatus::NotDone => "❌",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Done => "Done",
            TaskStatus::InProgress => "In progress",
            TaskStatus::NotDone => "Not done",
        }
    }

    /// Glyph followed by the label, as shown in the task table.
    #[must_use]
    pub fn display(self) -> String {
        format!("{} {}", self.glyph(), self.label())
    }
}

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

/// Task difficulty on a 0-5 star scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MAX: u8 = 5;

    pub const FILLED_STAR: char = '★';
    pub const HOLLOW_STAR: char = '☆';

    /// Builds a difficulty, clamping anything above `MAX` down to `MAX`.
    #[must_use]
    pub fn new(stars: u8) -> Self {
        if stars > Self::MAX {
            tracing::debug!(stars, max = Self::MAX, "clamping task difficulty");
        }
        Self(stars.min(Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// `value` filled stars followed by `MAX - value` hollow stars.
    #[must_use]
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let hollow = usize::from(Self::MAX - self.0);
        let mut out = String::with_capacity((filled + hollow) * Self::FILLED_STAR.len_utf8());
        out.extend(std::iter::repeat_n(Self::FILLED_STAR, filled));
        out.extend(std::iter::repeat_n(Self::HOLLOW_STAR, hollow));
        out
    }
}

//
// ─── TASK RECORD ──────────────────────────────────────────────────────────────
//

/// A single entry in the task log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub date: NaiveDate,
    pub title: String,
    pub status: TaskStatus,
    pub difficulty: Difficulty,
}

impl TaskRecord {
    #[must_use]
    pub fn new(
        date: NaiveDate,
        title: impl Into<String>,
        status: TaskStatus,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            date,
            title: title.into(),
            status,
            difficulty,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
