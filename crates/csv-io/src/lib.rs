//! Flat-file input and output.
//!
//! Reads mempool snapshots from CSV and writes packing results back out in
//! the legacy flat layout, where block aggregates ride on the last row of
//! each block.

mod error;
mod reader;
mod writer;

pub use error::{CsvIoError, CsvIoResult};
pub use reader::read_records;
pub use writer::{write_results, write_summary, SummaryRow};
