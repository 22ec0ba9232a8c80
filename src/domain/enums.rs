/// Outcome of a cycle as shown in the history list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStatus {
    InProgress,
    Interrupted,
    Finished,
}

impl CycleStatus {
    /// Human-readable label for the history pane
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "In progress",
            Self::Interrupted => "Interrupted",
            Self::Finished => "Finished",
        }
    }

    /// Whether the cycle can no longer change
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Interrupted | Self::Finished)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Filling in the new-cycle form
    Editing,
    /// A cycle is counting down, the form is locked
    Running,
    /// Browsing the cycle history
    History,
}

/// Field of the new-cycle form that currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Task,
    Minutes,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            Self::Task => Self::Minutes,
            Self::Minutes => Self::Task,
        }
    }
}
