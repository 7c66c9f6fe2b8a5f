use std::{collections::HashMap, path::Path};

use blocksim_primitives::{RawTxRecord, SealedBlock};
use serde::Serialize;

use crate::error::{CsvIoError, CsvIoResult};

/// Writes packing results in the legacy flat layout.
///
/// Rows are grouped by block in seal order and keep the input column shape.
/// Every included row carries its block number; `BlockReward` and `BlockGas`
/// are filled on the last row of each block only and left empty elsewhere.
/// Discarded transactions do not appear.
pub fn write_results(
    path: &Path,
    records: &[RawTxRecord],
    blocks: &[SealedBlock],
) -> CsvIoResult<()> {
    let by_hash: HashMap<&str, &RawTxRecord> =
        records.iter().map(|r| (r.tx_hash.as_str(), r)).collect();

    let mut writer = csv::Writer::from_path(path)?;
    for block in blocks {
        let last = block.tx_count().saturating_sub(1);
        for (pos, txid) in block.txids().iter().enumerate() {
            let record = by_hash
                .get(txid.as_str())
                .ok_or_else(|| CsvIoError::UnknownTx {
                    block: block.number(),
                    txid: txid.clone(),
                })?;
            let mut row = (*record).clone();
            row.block_number = block.number().to_string();
            if pos == last {
                row.block_reward = block.reward().to_string();
                row.block_gas = block.gas_used().to_string();
            } else {
                row.block_reward = String::new();
                row.block_gas = String::new();
            }
            writer.serialize(row)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// One line of the per-run summary file.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "Strategy")]
    pub strategy: String,

    #[serde(rename = "WindowBlocks")]
    pub window_blocks: usize,

    #[serde(rename = "OverflowBlocks")]
    pub overflow_blocks: usize,

    #[serde(rename = "IncludedTxs")]
    pub included_txs: usize,

    #[serde(rename = "DiscardedTxs")]
    pub discarded_txs: usize,

    #[serde(rename = "TotalGas")]
    pub total_gas: u64,

    #[serde(rename = "TotalReward")]
    pub total_reward: u128,

    /// Mean gas use of the sealed blocks against the hard cap, in `[0, 1]`.
    #[serde(rename = "MeanGasUtilization")]
    pub mean_gas_utilization: f64,
}

/// Writes one summary row per run, typically one per strategy.
pub fn write_summary(path: &Path, rows: &[SummaryRow]) -> CsvIoResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
