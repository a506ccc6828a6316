use std::path::PathBuf;

/// Errors that can occur while loading or querying an address table
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Neither the supplied file nor the default path could be found
    #[error("Source not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error reading the source
    #[error("Failed to read source: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// The source has no header row or is otherwise unusable
    #[error("Invalid table: {0}")]
    ParseError(String),

    /// Record identifier 0 or otherwise below the valid range
    #[error("Record {requested} is out of range (valid: 1-{max})")]
    OutOfRange {
        /// Requested identifier
        requested: usize,
        /// Largest valid identifier
        max: usize,
    },

    /// Record identifier past the last record
    #[error("Record {requested} not found (table has {max} records)")]
    RecordNotFound {
        /// Requested identifier
        requested: usize,
        /// Largest valid identifier
        max: usize,
    },
}
