use super::enums::CycleStatus;
use super::error::ValidationError;
use chrono::{DateTime, Local};
use std::fmt;
use uuid::Uuid;

/// Shortest cycle the form accepts, in minutes
pub const MIN_MINUTES: u32 = 5;
/// Longest cycle the form accepts, in minutes
pub const MAX_MINUTES: u32 = 60;

/// Stable identifier of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleId(Uuid);

impl CycleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CycleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated input for starting a cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCycle {
    pub task: String,
    pub minutes_amount: u32,
}

impl NewCycle {
    /// Check raw form input. The task is trimmed.
    pub fn validate(task: &str, minutes_amount: u32) -> Result<Self, ValidationError> {
        let task = task.trim();
        if task.is_empty() {
            return Err(ValidationError::EmptyTask);
        }
        if !(MIN_MINUTES..=MAX_MINUTES).contains(&minutes_amount) {
            return Err(ValidationError::MinutesOutOfRange {
                minutes: minutes_amount,
                min: MIN_MINUTES,
                max: MAX_MINUTES,
            });
        }
        Ok(Self {
            task: task.to_string(),
            minutes_amount,
        })
    }
}

/// One planned work interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// Unique ID, fixed at creation
    pub id: CycleId,
    /// What the user is working on
    pub task: String,
    /// Planned duration in minutes
    pub minutes_amount: u32,
    /// When the cycle was started
    pub start_date: DateTime<Local>,
    /// Set once if the user stopped the cycle early
    pub interrupted_date: Option<DateTime<Local>>,
    /// Set once if the cycle ran its full duration
    pub finished_date: Option<DateTime<Local>>,
}

impl Cycle {
    pub fn new(input: NewCycle, start_date: DateTime<Local>) -> Self {
        Self {
            id: CycleId::new(),
            task: input.task,
            minutes_amount: input.minutes_amount,
            start_date,
            interrupted_date: None,
            finished_date: None,
        }
    }

    /// Planned duration in seconds
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes_amount) * 60
    }

    /// Whole seconds since the start, floored and never negative
    pub fn seconds_since_start(&self, now: DateTime<Local>) -> u64 {
        (now - self.start_date).num_seconds().max(0) as u64
    }

    pub fn status(&self) -> CycleStatus {
        if self.finished_date.is_some() {
            CycleStatus::Finished
        } else if self.interrupted_date.is_some() {
            CycleStatus::Interrupted
        } else {
            CycleStatus::InProgress
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}
