//! Transaction identity, raw record shape, and the normalized pending form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque transaction identity (the source transaction hash).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(String);

impl TxId {
    /// Wraps a raw hash string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the underlying hash string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TxId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// One mempool record as it appears in the flat input/output files.
///
/// Numeric fields are kept as strings here. Parsing happens during
/// normalization so that a single malformed field drops one record instead of
/// failing the whole load.
///
/// The three trailing fields are empty on input and populated on output:
/// `block_number` on every included row, `block_reward`/`block_gas` only on
/// the last row of each block (legacy flat-output convention).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTxRecord {
    #[serde(rename = "TransactionHash")]
    pub tx_hash: String,

    /// Transaction type tag, passed through untouched.
    #[serde(rename = "TransactionType", default)]
    pub tx_type: String,

    #[serde(rename = "GasLimit")]
    pub gas_limit: String,

    #[serde(rename = "MaxPriorityFee")]
    pub max_priority_fee: String,

    /// Per-transaction producer reward in wei.
    #[serde(rename = "Reward")]
    pub reward: String,

    /// Arrival timestamp, ISO-8601.
    #[serde(rename = "TimeStamp")]
    pub timestamp: String,

    #[serde(rename = "BlockNumber", default)]
    pub block_number: String,

    #[serde(rename = "BlockReward", default)]
    pub block_reward: String,

    #[serde(rename = "BlockGas", default)]
    pub block_gas: String,
}

/// A normalized mempool transaction, the unit the packing engine schedules.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTx {
    /// Unique identity.
    pub txid: TxId,

    /// Gas consumed if included. Strictly positive, never above the hard cap.
    pub gas_limit: u64,

    /// Priority fee bid in wei.
    pub priority_fee: u128,

    /// Producer reward in wei if included.
    pub reward: u128,

    /// Arrival time, unix seconds.
    pub timestamp: i64,

    /// Priority fee per gas unit. Computed once at normalization; ranking key
    /// for the priority-greedy strategy.
    pub fee_density: f64,
}

impl PendingTx {
    /// Builds a pending transaction, deriving the fee density.
    ///
    /// Callers must have validated `gas_limit > 0` already.
    pub fn new(txid: TxId, gas_limit: u64, priority_fee: u128, reward: u128, timestamp: i64) -> Self {
        let fee_density = priority_fee as f64 / gas_limit as f64;
        Self {
            txid,
            gas_limit,
            priority_fee,
            reward,
            timestamp,
            fee_density,
        }
    }
}
