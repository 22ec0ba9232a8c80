use std::time::{Duration, Instant};

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Fastest the UI redraws while idle, in milliseconds
pub const UI_REFRESH_MS: u64 = 250;

/// Get the UI refresh duration
pub fn ui_refresh_duration() -> Duration {
    Duration::from_millis(UI_REFRESH_MS)
}

/// Periodic schedule with an explicit armed/cancelled lifetime.
///
/// Missed periods are not replayed: a late poll fires once and the next
/// deadline is measured from that poll. Every `arm` bumps the generation, so
/// a holder can tell a re-armed schedule from the one it started.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
    generation: u64,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
            generation: 0,
        }
    }

    /// Start ticking; the first tick is due one period from `now`.
    /// Returns the new generation.
    pub fn arm(&mut self, now: Instant) -> u64 {
        self.next_due = Some(now + self.period);
        self.generation += 1;
        self.generation
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if a tick is due, and schedules the next one
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or None if cancelled
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
