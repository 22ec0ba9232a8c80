//! Countdown driver: keeps elapsed time for the active cycle current and
//! finishes the cycle when its time is up.
//!
//! Elapsed time is always recomputed from the cycle's start date, so delayed or
//! skipped ticks catch up instead of drifting. The driver owns exactly one
//! [`Ticker`], bound to one cycle id. Whenever the store's active id changes the
//! ticker is cancelled before being re-armed, so a tick can never land on a
//! cycle that is already terminal. `Running` records the ticker generation it
//! armed; a tick from any other generation is ignored.

use crate::cycles::{Clock, CycleStore};
use crate::domain::{CountdownDisplay, CycleId};
use crate::ticker::Ticker;
use std::time::{Duration, Instant};
use tracing::debug;

/// Where the driver is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No active cycle, ticker cancelled
    Idle,
    /// Counting down the given cycle with the ticker armed at `generation`
    Running {
        cycle_id: CycleId,
        total_seconds: u64,
        generation: u64,
    },
}

/// Result of one poll or tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to count down
    Idle,
    /// Running, but the next tick is not due yet
    Waiting,
    /// Elapsed seconds were recomputed
    Updated(u64),
    /// The cycle reached its duration and was finished
    Finished(CycleId),
}

pub struct CountdownDriver {
    state: DriverState,
    ticker: Ticker,
}

impl CountdownDriver {
    pub fn new(tick_period: Duration) -> Self {
        Self {
            state: DriverState::Idle,
            ticker: Ticker::new(tick_period),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running { .. })
    }

    /// Cycle the ticker is currently bound to
    pub fn bound_cycle(&self) -> Option<CycleId> {
        match self.state {
            DriverState::Running { cycle_id, .. } => Some(cycle_id),
            DriverState::Idle => None,
        }
    }

    /// Follow the store's active cycle: re-arm on a new cycle, stop on none.
    pub fn sync<C: Clock>(&mut self, store: &CycleStore<C>, now: Instant) {
        if store.active_cycle_id() == self.bound_cycle() {
            return;
        }

        self.ticker.cancel();
        self.state = match store.active_cycle() {
            Some(cycle) => {
                let generation = self.ticker.arm(now);
                debug!(cycle = %cycle.id, generation, "Countdown armed");
                DriverState::Running {
                    cycle_id: cycle.id,
                    total_seconds: cycle.total_seconds(),
                    generation,
                }
            }
            None => {
                debug!("Countdown stopped");
                DriverState::Idle
            }
        };
    }

    /// Sync with the store, then tick if one is due.
    pub fn poll<C: Clock>(&mut self, store: &mut CycleStore<C>, now: Instant) -> TickOutcome {
        self.sync(store, now);
        if !self.is_running() {
            return TickOutcome::Idle;
        }
        if self.ticker.poll(now) {
            self.tick(store)
        } else {
            TickOutcome::Waiting
        }
    }

    /// Recompute elapsed time from the wall clock and finish the cycle if it is over.
    pub fn tick<C: Clock>(&mut self, store: &mut CycleStore<C>) -> TickOutcome {
        let DriverState::Running {
            cycle_id,
            total_seconds,
            generation,
        } = self.state
        else {
            return TickOutcome::Idle;
        };

        if !self.ticker.is_armed() || self.ticker.generation() != generation {
            debug!(cycle = %cycle_id, generation, "Dropping tick from a stale ticker");
            self.stop();
            return TickOutcome::Idle;
        }

        let Some(cycle) = store.active_cycle().filter(|c| c.id == cycle_id) else {
            // Cleared or replaced since the last sync
            self.stop();
            return TickOutcome::Idle;
        };

        let elapsed = cycle.seconds_since_start(store.now());
        if elapsed >= total_seconds {
            store.set_seconds_passed(total_seconds);
            store.finish_active_cycle();
            self.stop();
            debug!(cycle = %cycle_id, "Countdown completed");
            TickOutcome::Finished(cycle_id)
        } else {
            store.set_seconds_passed(elapsed);
            TickOutcome::Updated(elapsed)
        }
    }

    /// Generation of the armed ticker, None when idle
    #[cfg(test)]
    pub fn ticker_generation(&self) -> Option<u64> {
        match self.state {
            DriverState::Running { generation, .. } => Some(generation),
            DriverState::Idle => None,
        }
    }

    fn stop(&mut self) {
        self.ticker.cancel();
        self.state = DriverState::Idle;
    }

    /// How long the event loop may wait before the next tick
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_due(now)
    }

    /// Digits for the active cycle, "00:00" when nothing is running
    pub fn display<C: Clock>(&self, store: &CycleStore<C>) -> CountdownDisplay {
        match store.active_cycle() {
            Some(cycle) => CountdownDisplay::from_seconds(cycle.total_seconds(), store.seconds_passed()),
            None => CountdownDisplay::zero(),
        }
    }
}
