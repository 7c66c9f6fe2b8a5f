use blocksim_primitives::TxId;

/// Errors arising while reading or writing the flat files.
#[derive(Debug, thiserror::Error)]
pub enum CsvIoError {
    /// Underlying file could not be opened or written.
    #[error("file I/O: {0}")]
    Io(#[from] std::io::Error),

    /// A row failed to parse or serialize.
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    /// A sealed block references a transaction absent from the input records.
    #[error("block {block} references unknown transaction {txid}")]
    UnknownTx { block: u64, txid: TxId },
}

pub type CsvIoResult<T> = Result<T, CsvIoError>;
