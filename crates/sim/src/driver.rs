//! Windowed admission loop and overflow drain.

use std::collections::HashSet;

use blocksim_block_assembly::{assemble_block, BlockDraft, SelectionPolicy};
use blocksim_config::SimConfig;
use blocksim_mempool::Mempool;
use blocksim_primitives::{SealedBlock, TxId};
use tracing::{debug, info, warn};

use crate::summary::SimSummary;

/// Result of a full simulation run.
///
/// Every normalized input transaction ends up in exactly one place: a sealed
/// block, or the discard list.
#[derive(Debug, Clone, PartialEq)]
pub struct SimOutcome {
    /// Sealed blocks in seal order; numbers are sequential from 1.
    pub blocks: Vec<SealedBlock>,
    /// Transactions left when the overflow bound was hit, in arrival order.
    pub discarded: Vec<TxId>,
    /// Aggregate counters.
    pub summary: SimSummary,
}

/// One simulation run over a loaded mempool.
///
/// Phases: seed the clock from the earliest arrival, sweep fixed windows
/// until simulated time passes the latest remaining arrival, then drain the
/// remainder into at most `max_extra_blocks` overflow blocks.
#[derive(Debug)]
pub struct Simulation {
    pool: Mempool,
    policy: SelectionPolicy,
    config: SimConfig,
}

impl Simulation {
    /// Sets up a run. The pool is owned exclusively from here on.
    pub fn new(pool: Mempool, policy: SelectionPolicy, config: SimConfig) -> Self {
        Self {
            pool,
            policy,
            config,
        }
    }

    /// Runs the simulation to completion.
    pub fn run(mut self) -> SimOutcome {
        let mut blocks: Vec<SealedBlock> = Vec::new();
        let mut summary = SimSummary::default();

        // Seeding. An empty pool is normally rejected at load; guard anyway.
        let Some(mut clock) = self.pool.earliest_timestamp() else {
            return SimOutcome {
                blocks,
                discarded: Vec::new(),
                summary,
            };
        };

        let interval = self.config.block_interval_secs as i64;

        // Windowing. The clock advances by the fixed interval whether or not
        // a block was produced, so the iteration count is bounded by
        // (latest - earliest) / interval regardless of pool density.
        while let Some(latest) = self.pool.latest_timestamp() {
            if clock > latest {
                break;
            }

            let window_end = clock + interval;
            let candidates = self.pool.window_candidates(window_end);
            if !candidates.is_empty() {
                let mut selector = self.policy.selector(candidates);
                let draft =
                    assemble_block(selector.as_mut(), self.config.gas_target, self.config.gas_hard_cap);
                if !draft.is_empty() {
                    let number = blocks.len() as u64 + 1;
                    let (block, included) = seal(number, draft);
                    info!(
                        block = number,
                        txs = block.tx_count(),
                        gas_used = block.gas_used(),
                        "sealed window block"
                    );
                    summary.record_block(&block, false);
                    blocks.push(block);
                    self.pool.remove(&included);
                } else {
                    debug!(window_end, candidates = candidates.len(), "window packed nothing");
                }
            }

            clock = window_end;
        }

        info!(
            remaining = self.pool.len(),
            "windowed phase finished, draining overflow"
        );

        // Overflowing: whole remaining pool per pass, time ignored.
        let mut extra_blocks = 0;
        while !self.pool.is_empty() && extra_blocks < self.config.max_extra_blocks {
            let mut selector = self.policy.selector(self.pool.txs());
            let draft =
                assemble_block(selector.as_mut(), self.config.gas_target, self.config.gas_hard_cap);
            if draft.is_empty() {
                // Nothing in the pool fits at all; further passes would not
                // make progress.
                break;
            }

            let number = blocks.len() as u64 + 1;
            let (block, included) = seal(number, draft);
            info!(
                block = number,
                txs = block.tx_count(),
                gas_used = block.gas_used(),
                "sealed overflow block"
            );
            summary.record_block(&block, true);
            blocks.push(block);
            self.pool.remove(&included);
            extra_blocks += 1;
        }

        // Drained. Whatever is left is reported, never silently dropped.
        let discarded: Vec<TxId> = self.pool.txs().iter().map(|tx| tx.txid.clone()).collect();
        summary.discarded_txs = discarded.len();
        if !discarded.is_empty() {
            warn!(count = discarded.len(), "discarding transactions at overflow bound");
        }

        SimOutcome {
            blocks,
            discarded,
            summary,
        }
    }
}

/// Turns a non-empty draft into a sealed block plus its id set for removal.
fn seal(number: u64, draft: BlockDraft) -> (SealedBlock, HashSet<TxId>) {
    let (txs, gas_used, reward) = draft.into_parts();
    let txids: Vec<TxId> = txs.into_iter().map(|tx| tx.txid).collect();
    let included: HashSet<TxId> = txids.iter().cloned().collect();
    (SealedBlock::new(number, txids, gas_used, reward), included)
}
