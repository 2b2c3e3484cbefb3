use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Result, ToolError};
use crate::model::CsvTable;

/// Reads a UTF-8, comma-delimited CSV file whose first record is the header.
///
/// Records shorter than the header are padded with empty cells. Longer
/// records yield [`ToolError::TooManyFields`], invalid UTF-8 yields
/// [`ToolError::Csv`] and a file without any record yields
/// [`ToolError::EmptyCsv`].
pub fn read_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(ToolError::EmptyCsv);
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(ToolError::TooManyFields {
                line: record.position().map_or(index as u64 + 2, |pos| pos.line()),
                found: record.len(),
                expected: headers.len(),
            });
        }

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}
