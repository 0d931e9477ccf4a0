use serde::{Deserialize, Serialize};

use crate::model::progress::{FormatError, ProgressValue};

//
// ─── TREND ────────────────────────────────────────────────────────────────────
//

/// Direction of a skill's change since the last assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Reads the direction from a display delta such as `"+5%"` or `"↓2%"`.
    #[must_use]
    pub fn from_delta(delta: &str) -> Self {
        match delta.trim_start().chars().next() {
            Some('+' | '↑') => Self::Up,
            Some('-' | '↓') => Self::Down,
            _ => Self::Flat,
        }
    }
}

//
// ─── SKILL RECORD ─────────────────────────────────────────────────────────────
//

/// One row of the skill matrix.
///
/// Proficiency and trend are kept in their display form; parsing happens when the
/// row is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub proficiency: String,
    pub trend: String,
}

impl SkillRecord {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        proficiency: impl Into<String>,
        trend: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            proficiency: proficiency.into(),
            trend: trend.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `FormatError` if the proficiency string is malformed.
    pub fn progress(&self) -> Result<ProgressValue, FormatError> {
        ProgressValue::from_percent_str(&self.proficiency)
    }

    #[must_use]
    pub fn trend_direction(&self) -> Trend {
        Trend::from_delta(&self.trend)
    }
}
