//! Core types shared across the blocksim workspace.
//!
//! These are plain data carriers: the raw record shape as it appears on disk,
//! the normalized pending transaction the engine works with, and the sealed
//! block entity the engine produces.

mod block;
mod tx;

pub use block::SealedBlock;
pub use tx::{PendingTx, RawTxRecord, TxId};
