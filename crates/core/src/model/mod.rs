mod identity;
mod progress;
mod skill;
mod snapshot;
mod task;

pub use identity::{IdentityField, StudentIdentity};
pub use progress::{FormatError, ProgressValue, normalize_proficiency};
pub use skill::{SkillRecord, Trend};
pub use snapshot::{CodeSnippet, CourseProgress, ProfileSnapshot, SystemPanel};
pub use task::{Difficulty, TaskRecord, TaskStatus};
