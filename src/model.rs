/// A table loaded from one CSV file.
///
/// `headers` holds the first record; every row in `rows` has exactly
/// `headers.len()` cells, short records having been padded with empty cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// How the cells of a column are written to the worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every non-missing cell parses as a finite number.
    Number,
    /// Anything else; cells are written verbatim.
    Text,
}

impl CsvTable {
    /// Infers a [`ColumnKind`] for each column, ignoring missing cells. A
    /// column with nothing but missing cells is treated as text.
    pub fn column_kinds(&self) -> Vec<ColumnKind> {
        (0..self.headers.len())
            .map(|col_idx| {
                let mut values = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(col_idx))
                    .filter(|cell| !is_missing(cell))
                    .peekable();

                if values.peek().is_none() {
                    return ColumnKind::Text;
                }

                if values.all(|cell| parse_number(cell).is_some()) {
                    ColumnKind::Number
                } else {
                    ColumnKind::Text
                }
            })
            .collect()
    }
}

/// Tokens read as a missing value, as produced by common table exporters.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns `true` when `cell` holds no value and is left blank in the sheet.
pub fn is_missing(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell)
}

/// Parses a cell as a finite floating point number.
pub fn parse_number(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
