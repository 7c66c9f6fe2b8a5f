//! The simulation driver.
//!
//! Advances simulated time in fixed windows over the mempool, assembling one
//! block per window, then drains what remains in a bounded overflow phase.
//! Single-threaded and deterministic: identical input and policy produce
//! identical outcomes.

mod driver;
mod summary;

pub use driver::{Simulation, SimOutcome};
pub use summary::SimSummary;
