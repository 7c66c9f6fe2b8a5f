//! Raw record normalization.
//!
//! Fails closed: a record that cannot be parsed, or whose gas limit falls
//! outside `(0, gas_hard_cap]`, is dropped and never enters the pool. Drops
//! are counted per reason so the caller can report them.

use blocksim_primitives::{PendingTx, RawTxRecord, TxId};
use chrono::{DateTime, NaiveDateTime};
use tracing::debug;

/// Per-reason drop counts from one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Records seen.
    pub total: usize,
    /// Records that survived.
    pub accepted: usize,
    /// Dropped: unparseable gas, fee, or reward field.
    pub bad_numeric: usize,
    /// Dropped: unparseable arrival timestamp.
    pub bad_timestamp: usize,
    /// Dropped: gas limit zero or above the hard cap.
    pub gas_out_of_range: usize,
}

impl NormalizeStats {
    /// Records dropped for any reason.
    pub fn dropped(&self) -> usize {
        self.total - self.accepted
    }
}

/// Parses an arrival timestamp to unix seconds.
///
/// Accepts RFC 3339 (the collector writes `Date.toISOString()`-style values)
/// and a naive `YYYY-MM-DD HH:MM:SS` fallback interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.and_utc().timestamp());
        }
    }
    None
}

/// Normalizes raw records into pending transactions, dropping invalid ones.
pub fn normalize(records: &[RawTxRecord], gas_hard_cap: u64) -> (Vec<PendingTx>, NormalizeStats) {
    let mut stats = NormalizeStats {
        total: records.len(),
        ..Default::default()
    };
    let mut txs = Vec::with_capacity(records.len());

    for record in records {
        let (gas_limit, priority_fee, reward) = match parse_amounts(record) {
            Some(parsed) => parsed,
            None => {
                debug!(tx_hash = %record.tx_hash, "dropping record with unparseable amounts");
                stats.bad_numeric += 1;
                continue;
            }
        };

        if gas_limit == 0 || gas_limit > gas_hard_cap {
            debug!(
                tx_hash = %record.tx_hash,
                gas_limit,
                gas_hard_cap,
                "dropping record with out-of-range gas limit"
            );
            stats.gas_out_of_range += 1;
            continue;
        }

        let timestamp = match parse_timestamp(&record.timestamp) {
            Some(ts) => ts,
            None => {
                debug!(tx_hash = %record.tx_hash, raw = %record.timestamp, "dropping record with unparseable timestamp");
                stats.bad_timestamp += 1;
                continue;
            }
        };

        txs.push(PendingTx::new(
            TxId::new(record.tx_hash.clone()),
            gas_limit,
            priority_fee,
            reward,
            timestamp,
        ));
        stats.accepted += 1;
    }

    (txs, stats)
}

fn parse_amounts(record: &RawTxRecord) -> Option<(u64, u128, u128)> {
    let gas_limit = record.gas_limit.trim().parse::<u64>().ok()?;
    let priority_fee = record.max_priority_fee.trim().parse::<u128>().ok()?;
    let reward = record.reward.trim().parse::<u128>().ok()?;
    Some((gas_limit, priority_fee, reward))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hash: &str, gas: &str, fee: &str, reward: &str, ts: &str) -> RawTxRecord {
        RawTxRecord {
            tx_hash: hash.to_owned(),
            gas_limit: gas.to_owned(),
            max_priority_fee: fee.to_owned(),
            reward: reward.to_owned(),
            timestamp: ts.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_rfc3339_timestamps() {
        assert_eq!(parse_timestamp("1970-01-01T00:01:00Z"), Some(60));
        assert_eq!(parse_timestamp("1970-01-01T00:01:00.000Z"), Some(60));
        assert_eq!(parse_timestamp("1970-01-01 00:01:00"), Some(60));
        assert_eq!(parse_timestamp("not a date"), None);
    }

    #[test]
    fn valid_record_normalizes() {
        let records = vec![record("0x01", "21000", "42000", "7", "1970-01-01T00:01:00Z")];
        let (txs, stats) = normalize(&records, 60_000_000);
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].gas_limit, 21_000);
        assert_eq!(txs[0].priority_fee, 42_000);
        assert_eq!(txs[0].reward, 7);
        assert_eq!(txs[0].timestamp, 60);
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.dropped(), 0);
    }

    #[test]
    fn drops_are_counted_per_reason() {
        let records = vec![
            record("0x01", "21000", "1", "1", "1970-01-01T00:01:00Z"),
            record("0x02", "garbage", "1", "1", "1970-01-01T00:01:00Z"),
            record("0x03", "21000", "1", "1", "yesterday-ish"),
            record("0x04", "0", "1", "1", "1970-01-01T00:01:00Z"),
            record("0x05", "60000001", "1", "1", "1970-01-01T00:01:00Z"),
        ];
        let (txs, stats) = normalize(&records, 60_000_000);
        assert_eq!(txs.len(), 1);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.bad_numeric, 1);
        assert_eq!(stats.bad_timestamp, 1);
        assert_eq!(stats.gas_out_of_range, 2);
    }

    #[test]
    fn gas_exactly_at_cap_is_kept() {
        let records = vec![record("0x01", "60000000", "1", "1", "1970-01-01T00:01:00Z")];
        let (txs, _) = normalize(&records, 60_000_000);
        assert_eq!(txs.len(), 1);
    }
}
