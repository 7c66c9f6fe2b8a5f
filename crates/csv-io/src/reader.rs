use std::path::Path;

use blocksim_primitives::RawTxRecord;

use crate::error::CsvIoResult;

/// Reads all rows of a mempool snapshot file.
///
/// Field-level validation is not done here. Every structurally well-formed
/// row comes back as a [`RawTxRecord`] with its numeric fields still as
/// strings; normalization decides what to keep.
pub fn read_records(path: &Path) -> CsvIoResult<Vec<RawTxRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: RawTxRecord = row?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    const HEADER: &str =
        "TransactionHash,TransactionType,GasLimit,MaxPriorityFee,Reward,TimeStamp,BlockNumber,BlockReward,BlockGas";

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn reads_rows_and_trims_whitespace() {
        let file = write_file(&format!(
            "{HEADER}\n0xaa, 2 ,21000,1000,500,2024-03-01T00:00:12Z,,,\n"
        ));
        let records = read_records(file.path()).expect("read");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tx_hash, "0xaa");
        assert_eq!(records[0].tx_type, "2");
        assert_eq!(records[0].gas_limit, "21000");
        assert!(records[0].block_number.is_empty());
    }

    #[test]
    fn input_without_output_columns_parses() {
        // Snapshot files carry only the first six columns.
        let file = write_file(
            "TransactionHash,TransactionType,GasLimit,MaxPriorityFee,Reward,TimeStamp\n\
             0xbb,0,50000,notanumber,0,2024-03-01T00:00:13Z\n",
        );
        let records = read_records(file.path()).expect("read");
        assert_eq!(records.len(), 1);
        // Garbage stays as-is; normalization drops it later.
        assert_eq!(records[0].max_priority_fee, "notanumber");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_records(Path::new("/definitely/not/here.csv")).is_err());
    }
}
