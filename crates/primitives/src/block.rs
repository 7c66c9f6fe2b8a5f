//! Sealed block entity.

use crate::tx::TxId;

/// One capacity-bounded block produced by the simulation.
///
/// Blocks carry their own aggregates. The legacy flat-output convention of
/// stamping totals onto the last member row is reconstructed by the CSV
/// writer from this entity, not stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedBlock {
    number: u64,
    txids: Vec<TxId>,
    gas_used: u64,
    reward: u128,
}

impl SealedBlock {
    /// Creates a sealed block. `number` is the sequential id assigned by the
    /// driver, starting at 1.
    pub fn new(number: u64, txids: Vec<TxId>, gas_used: u64, reward: u128) -> Self {
        Self {
            number,
            txids,
            gas_used,
            reward,
        }
    }

    /// Sequential block number, starting at 1.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Included transaction ids, in admission order.
    pub fn txids(&self) -> &[TxId] {
        &self.txids
    }

    /// Total gas consumed by the included transactions.
    pub fn gas_used(&self) -> u64 {
        self.gas_used
    }

    /// Total producer reward in wei.
    pub fn reward(&self) -> u128 {
        self.reward
    }

    /// Number of included transactions.
    pub fn tx_count(&self) -> usize {
        self.txids.len()
    }
}
