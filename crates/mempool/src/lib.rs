//! Transaction mempool for the packing simulation.
//!
//! Holds normalized pending transactions sorted by arrival timestamp, serves
//! time-window candidate queries, and shrinks by exact-identity removal as
//! transactions are placed into blocks.

mod error;
mod normalize;
mod pool;

pub use error::MempoolError;
pub use normalize::{normalize, parse_timestamp, NormalizeStats};
pub use pool::Mempool;

pub type MempoolResult<T> = Result<T, MempoolError>;
