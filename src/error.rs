use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur while the
/// tool walks the input tree, loads CSV files, or emits the workbook.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when a CSV file cannot be decoded or parsed.
    #[error("{0}")]
    Csv(#[from] csv::Error),

    /// Raised when a CSV record holds more fields than the header.
    #[error("line {line} has {found} fields, but the header has {expected}")]
    TooManyFields {
        line: u64,
        found: usize,
        expected: usize,
    },

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when the directory walk cannot descend into an entry.
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Raised when the chosen root does not exist.
    #[error("input folder not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the chosen root exists but is not a directory.
    #[error("input path is not a folder: {0}")]
    NotADirectory(PathBuf),

    /// Raised when a CSV file holds no header row at all.
    #[error("CSV file has no header row")]
    EmptyCsv,

    /// Raised when a table does not fit the worksheet grid.
    #[error("table too large for a worksheet: {0}")]
    TableTooLarge(String),

    /// Raised when a derived sheet name is already taken in the workbook.
    #[error("worksheet name '{0}' is already used by another file")]
    DuplicateSheetName(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
