//! Simulation configuration.
//!
//! Loaded from TOML, every field defaulted so an empty file (or no file at
//! all) yields the reference parameters the simulator was calibrated with.

mod config;

pub use config::{ConfigError, SimConfig};
