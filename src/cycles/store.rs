use super::clock::{Clock, SystemClock};
use super::state::{reduce, CycleAction, CyclesState};
use crate::domain::{task_suggestions, Cycle, CycleError, CycleId, NewCycle};
use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

/// Owner of the cycle history and the active cycle.
///
/// All mutations of a `Cycle` go through here. The countdown only reads the
/// active cycle and asks for `finish_active_cycle` when time is up.
pub struct CycleStore<C: Clock = SystemClock> {
    clock: C,
    state: CyclesState,
    seconds_passed: u64,
}

impl<C: Clock> CycleStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: CyclesState::default(),
            seconds_passed: 0,
        }
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    /// Start a new cycle now and make it active.
    ///
    /// Fails with a validation error for bad input, and with
    /// `CycleAlreadyActive` if another cycle is still counting down.
    pub fn create_cycle(&mut self, task: &str, minutes_amount: u32) -> Result<CycleId, CycleError> {
        let input = NewCycle::validate(task, minutes_amount)?;
        let cycle = Cycle::new(input, self.clock.now());
        let id = cycle.id;

        self.state = reduce(&self.state, CycleAction::Create(cycle)).map_err(|e| {
            warn!(error = %e, "Rejected new cycle");
            e
        })?;
        self.seconds_passed = 0;

        info!(cycle = %id, task = task.trim(), minutes = minutes_amount, "Cycle started");
        Ok(id)
    }

    /// Stop the active cycle early. No-op when nothing is running.
    pub fn interrupt_active_cycle(&mut self) -> Option<CycleId> {
        let at = self.clock.now();
        let id = self.apply_terminal(CycleAction::InterruptActive { at })?;
        info!(cycle = %id, "Cycle interrupted");
        Some(id)
    }

    /// Mark the active cycle as having run its full duration. No-op when nothing is running.
    pub fn finish_active_cycle(&mut self) -> Option<CycleId> {
        let at = self.clock.now();
        let id = self.apply_terminal(CycleAction::FinishActive { at })?;
        info!(cycle = %id, "Cycle finished");
        Some(id)
    }

    fn apply_terminal(&mut self, action: CycleAction) -> Option<CycleId> {
        let id = self.state.active_cycle_id;
        match reduce(&self.state, action) {
            Ok(next) => {
                self.state = next;
                id
            }
            Err(e) => {
                debug!(error = %e, "Ignoring terminal transition");
                None
            }
        }
    }

    pub fn active_cycle(&self) -> Option<&Cycle> {
        self.state.active_cycle()
    }

    pub fn active_cycle_id(&self) -> Option<CycleId> {
        self.state.active_cycle_id
    }

    pub fn has_active_cycle(&self) -> bool {
        self.state.active_cycle_id.is_some()
    }

    /// All cycles in creation order
    pub fn history(&self) -> &[Cycle] {
        &self.state.cycles
    }

    pub fn task_suggestions(&self) -> Vec<String> {
        task_suggestions(&self.state.cycles)
    }

    pub fn seconds_passed(&self) -> u64 {
        self.seconds_passed
    }

    pub fn set_seconds_passed(&mut self, seconds: u64) {
        self.seconds_passed = seconds;
    }
}
