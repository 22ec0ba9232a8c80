pub mod cycle;
pub mod enums;
pub mod error;
pub mod views;

pub use cycle::{Cycle, CycleId, NewCycle, MAX_MINUTES, MIN_MINUTES};
pub use enums::{CycleStatus, FormField, UiMode};
pub use error::CycleError;
pub use views::{complete_task, format_started_ago, task_suggestions, CountdownDisplay, CountdownView};
