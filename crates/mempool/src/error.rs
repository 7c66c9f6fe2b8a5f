//! Error types for mempool operations.

/// Errors that can occur while building the mempool.
#[derive(Debug, thiserror::Error)]
pub enum MempoolError {
    /// Every input record was dropped during normalization. Fatal for the
    /// run: there is nothing to schedule.
    #[error("no valid transactions after normalizing {total} records")]
    NoValidTransactions { total: usize },
}
