pub mod clock;
pub mod state;
pub mod store;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::ManualClock;
pub use store::CycleStore;
