//! Application services for task orchestration.

mod lifecycle;
mod view;

pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use view::{TaskView, format_timestamp};
