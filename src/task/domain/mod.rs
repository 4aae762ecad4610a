//! Domain model for task tracking.
//!
//! The task domain models title validation, task creation and completion
//! toggling while keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod task;
mod title;

pub use error::{ParseTaskIdError, TitleValidationError};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task};
pub use title::{MAX_TITLE_CHARS, MIN_TITLE_CHARS, TaskTitle, TitleInput, validate_title};
