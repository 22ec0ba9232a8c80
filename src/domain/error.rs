use super::cycle::CycleId;
use thiserror::Error;

/// Rejected input for a new cycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a task name")]
    EmptyTask,

    #[error("A cycle must last between {min} and {max} minutes (got {minutes})")]
    MinutesOutOfRange { minutes: u32, min: u32, max: u32 },
}

/// Errors raised by cycle state transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Cycle {0} is still running")]
    CycleAlreadyActive(CycleId),

    #[error("No cycle is running")]
    NoActiveCycle,
}
