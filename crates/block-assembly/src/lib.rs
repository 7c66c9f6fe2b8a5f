//! Block assembly: selection strategies and the capacity-aware packing rule.
//!
//! A [`TxSelector`] decides which candidate comes next; [`assemble_block`]
//! packs one block from a selector under a soft gas target and a hard gas
//! cap. The packing rule is first-fit greedy with no backtracking: it is not
//! an exact knapsack solver and makes no optimality claim.

mod assembler;
mod selector;

pub use assembler::{assemble_block, BlockDraft};
pub use selector::{ArrivalSelector, PrioritySelector, SelectionPolicy, TxSelector};
