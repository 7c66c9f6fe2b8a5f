//! The pending transaction pool.

use std::collections::HashSet;

use blocksim_primitives::{PendingTx, RawTxRecord, TxId};
use tracing::info;

use crate::{
    normalize::{normalize, NormalizeStats},
    MempoolError, MempoolResult,
};

/// Pool of admitted-but-unscheduled transactions.
///
/// Kept sorted by ascending arrival timestamp from construction onward.
/// Removal preserves relative order, so window queries stay prefix scans for
/// the whole run.
#[derive(Debug, Clone)]
pub struct Mempool {
    txs: Vec<PendingTx>,
}

impl Mempool {
    /// Normalizes raw records and builds the pool.
    ///
    /// Individual invalid records are dropped silently (see
    /// [`normalize`]); ending up with zero survivors is fatal.
    pub fn load(
        records: &[RawTxRecord],
        gas_hard_cap: u64,
    ) -> MempoolResult<(Self, NormalizeStats)> {
        let (mut txs, stats) = normalize(records, gas_hard_cap);
        if txs.is_empty() {
            return Err(MempoolError::NoValidTransactions {
                total: records.len(),
            });
        }

        // Stable: equal timestamps keep input order.
        txs.sort_by_key(|tx| tx.timestamp);

        info!(
            accepted = stats.accepted,
            dropped = stats.dropped(),
            "mempool loaded"
        );
        Ok((Self { txs }, stats))
    }

    /// Builds a pool from already-normalized transactions. Used by the
    /// driver tests; same sorting rules as [`Mempool::load`].
    pub fn from_pending(mut txs: Vec<PendingTx>) -> Self {
        txs.sort_by_key(|tx| tx.timestamp);
        Self { txs }
    }

    /// All transactions with `timestamp <= window_end`, in arrival order.
    ///
    /// The boundary is inclusive: a transaction arriving exactly at
    /// `window_end` belongs to this window. Because the pool is sorted and
    /// only ever shrinks, this is a prefix of the backing vector.
    pub fn window_candidates(&self, window_end: i64) -> &[PendingTx] {
        let end = self.txs.partition_point(|tx| tx.timestamp <= window_end);
        &self.txs[..end]
    }

    /// Removes every transaction whose id is in `ids`, preserving the
    /// relative order of survivors. Returns how many were removed.
    pub fn remove(&mut self, ids: &HashSet<TxId>) -> usize {
        let before = self.txs.len();
        self.txs.retain(|tx| !ids.contains(&tx.txid));
        before - self.txs.len()
    }

    /// Arrival timestamp of the earliest remaining transaction.
    pub fn earliest_timestamp(&self) -> Option<i64> {
        self.txs.first().map(|tx| tx.timestamp)
    }

    /// Arrival timestamp of the latest remaining transaction.
    pub fn latest_timestamp(&self) -> Option<i64> {
        self.txs.last().map(|tx| tx.timestamp)
    }

    /// Remaining transactions, in arrival order.
    pub fn txs(&self) -> &[PendingTx] {
        &self.txs
    }

    /// Number of remaining transactions.
    pub fn len(&self) -> usize {
        self.txs.len()
    }

    /// True when nothing remains.
    pub fn is_empty(&self) -> bool {
        self.txs.is_empty()
    }
}
