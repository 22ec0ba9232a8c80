//! Pure transition function for cycle history.
//!
//! `reduce` never reads the clock: timestamps arrive inside the action, so the
//! same state and action always yield the same result.

use crate::domain::{Cycle, CycleError, CycleId};
use chrono::{DateTime, Local};

/// History of cycles plus the one currently counting down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CyclesState {
    pub cycles: Vec<Cycle>,
    pub active_cycle_id: Option<CycleId>,
}

impl CyclesState {
    pub fn active_cycle(&self) -> Option<&Cycle> {
        let id = self.active_cycle_id?;
        self.cycles.iter().find(|cycle| cycle.id == id)
    }
}

/// Transitions accepted by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleAction {
    Create(Cycle),
    InterruptActive { at: DateTime<Local> },
    FinishActive { at: DateTime<Local> },
}

/// Apply one action, returning the next state.
///
/// Creating while a cycle is active fails with `CycleAlreadyActive`; interrupting
/// or finishing without one fails with `NoActiveCycle`. The input state is left
/// untouched either way.
pub fn reduce(state: &CyclesState, action: CycleAction) -> Result<CyclesState, CycleError> {
    let mut next = state.clone();

    match action {
        CycleAction::Create(cycle) => {
            if let Some(active) = state.active_cycle_id {
                return Err(CycleError::CycleAlreadyActive(active));
            }
            next.active_cycle_id = Some(cycle.id);
            next.cycles.push(cycle);
        }
        CycleAction::InterruptActive { at } => {
            let cycle = take_active(&mut next)?;
            cycle.interrupted_date = Some(at);
        }
        CycleAction::FinishActive { at } => {
            let cycle = take_active(&mut next)?;
            cycle.finished_date = Some(at);
        }
    }

    Ok(next)
}

/// Clear the active reference and hand back the cycle it pointed at
fn take_active(state: &mut CyclesState) -> Result<&mut Cycle, CycleError> {
    let id = state.active_cycle_id.take().ok_or(CycleError::NoActiveCycle)?;
    state
        .cycles
        .iter_mut()
        .find(|cycle| cycle.id == id && !cycle.is_terminal())
        .ok_or(CycleError::NoActiveCycle)
}
