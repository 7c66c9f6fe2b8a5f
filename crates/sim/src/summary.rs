//! Run summary aggregates.

use blocksim_primitives::SealedBlock;

/// Aggregate counters for one finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimSummary {
    /// Blocks sealed during the windowed phase.
    pub window_blocks: usize,
    /// Blocks sealed during the overflow phase.
    pub overflow_blocks: usize,
    /// Transactions included across all blocks.
    pub included_txs: usize,
    /// Transactions left over and permanently discarded.
    pub discarded_txs: usize,
    /// Gas consumed across all blocks.
    pub total_gas: u64,
    /// Reward accumulated across all blocks, in wei.
    pub total_reward: u128,
}

impl SimSummary {
    /// Total blocks sealed in both phases.
    pub fn blocks_built(&self) -> usize {
        self.window_blocks + self.overflow_blocks
    }

    /// Mean gas utilization of the sealed blocks against the hard cap,
    /// in `[0, 1]`. Zero when no block was built.
    pub fn mean_utilization(&self, gas_hard_cap: u64) -> f64 {
        let blocks = self.blocks_built();
        if blocks == 0 || gas_hard_cap == 0 {
            return 0.0;
        }
        self.total_gas as f64 / (blocks as f64 * gas_hard_cap as f64)
    }

    /// Folds a sealed block into the counters.
    pub(crate) fn record_block(&mut self, block: &SealedBlock, overflow: bool) {
        if overflow {
            self.overflow_blocks += 1;
        } else {
            self.window_blocks += 1;
        }
        self.included_txs += block.tx_count();
        self.total_gas += block.gas_used();
        self.total_reward += block.reward();
    }
}
