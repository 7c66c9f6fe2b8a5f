//! Candidate selection strategies.

use std::collections::{BinaryHeap, VecDeque};

use blocksim_primitives::PendingTx;
use serde::{Deserialize, Serialize};

/// Source of candidates for one block, in strategy order.
///
/// Selectors are consumed over a single assembly pass. A candidate handed out
/// and not included is simply gone from the selector; it stays in the mempool
/// and becomes a candidate again for the next block.
pub trait TxSelector {
    /// The next-best candidate per this strategy, or `None` when exhausted.
    fn next_tx(&mut self) -> Option<PendingTx>;
}

/// Which admission strategy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Max-heap over fee density (priority-greedy).
    PriorityFee,
    /// Strict arrival order (FCFS).
    ArrivalOrder,
}

impl SelectionPolicy {
    /// Builds the selector for this policy over the given candidates.
    ///
    /// `candidates` must already be in arrival order, as the mempool
    /// guarantees; [`ArrivalSelector`] relies on it.
    pub fn selector(&self, candidates: &[PendingTx]) -> Box<dyn TxSelector> {
        match self {
            Self::PriorityFee => Box::new(PrioritySelector::new(candidates)),
            Self::ArrivalOrder => Box::new(ArrivalSelector::new(candidates)),
        }
    }
}

/// Wrapper ordering transactions by fee density for the heap.
///
/// Densities are finite (gas limit is strictly positive), so `total_cmp` is a
/// plain numeric order here. Ties between equal densities extract in heap
/// order, which is unspecified; callers must not depend on tie order. For a
/// fixed insertion order the extraction order is still deterministic.
#[derive(Debug)]
struct ByDensity(PendingTx);

impl PartialEq for ByDensity {
    fn eq(&self, other: &Self) -> bool {
        self.0.fee_density == other.0.fee_density
    }
}

impl Eq for ByDensity {}

impl PartialOrd for ByDensity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByDensity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.fee_density.total_cmp(&other.0.fee_density)
    }
}

/// Max-heap selector keyed by fee density. Insert and extract are O(log n).
#[derive(Debug)]
pub struct PrioritySelector {
    heap: BinaryHeap<ByDensity>,
}

impl PrioritySelector {
    /// Heapifies the candidate set.
    pub fn new(candidates: &[PendingTx]) -> Self {
        let heap = candidates.iter().cloned().map(ByDensity).collect();
        Self { heap }
    }
}

impl TxSelector for PrioritySelector {
    fn next_tx(&mut self) -> Option<PendingTx> {
        self.heap.pop().map(|entry| entry.0)
    }
}

/// Arrival-order selector: yields candidates exactly as given, no reordering.
#[derive(Debug)]
pub struct ArrivalSelector {
    queue: VecDeque<PendingTx>,
}

impl ArrivalSelector {
    /// Queues the candidates as-is.
    pub fn new(candidates: &[PendingTx]) -> Self {
        Self {
            queue: candidates.iter().cloned().collect(),
        }
    }
}

impl TxSelector for ArrivalSelector {
    fn next_tx(&mut self) -> Option<PendingTx> {
        self.queue.pop_front()
    }
}
