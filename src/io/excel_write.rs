use rust_xlsxwriter::{ColNum, RowNum, Worksheet};

use crate::error::{Result, ToolError};
use crate::model::{ColumnKind, CsvTable, is_missing, parse_number};

/// Builds a detached worksheet named `sheet_name` holding `table`.
///
/// The header lands in the first row, data rows follow without an index
/// column. Numeric columns are written as numbers; missing cells (empty or a
/// missing-value token such as `NaN` or `N/A`) are left blank.
pub fn build_worksheet(sheet_name: &str, table: &CsvTable) -> Result<Worksheet> {
    let mut worksheet = Worksheet::new();
    worksheet.set_name(sheet_name)?;

    for (col_idx, header) in table.headers.iter().enumerate() {
        worksheet.write_string(0, col_num(col_idx)?, header)?;
    }

    let kinds = table.column_kinds();
    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = row_num(row_idx + 1)?;
        for (col_idx, cell) in row.iter().enumerate() {
            if is_missing(cell) {
                continue;
            }
            let col_num = col_num(col_idx)?;
            let number = match kinds.get(col_idx) {
                Some(ColumnKind::Number) => parse_number(cell),
                _ => None,
            };
            match number {
                Some(value) => worksheet.write_number(row_num, col_num, value)?,
                None => worksheet.write_string(row_num, col_num, cell)?,
            };
        }
    }

    Ok(worksheet)
}

fn row_num(index: usize) -> Result<RowNum> {
    RowNum::try_from(index)
        .map_err(|_| ToolError::TableTooLarge(format!("row {index} is out of range")))
}

fn col_num(index: usize) -> Result<ColNum> {
    ColNum::try_from(index)
        .map_err(|_| ToolError::TableTooLarge(format!("column {index} is out of range")))
}
