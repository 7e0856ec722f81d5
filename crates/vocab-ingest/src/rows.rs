//! Row-oriented CSV reading for small lookup tables.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result, open_error};

/// A CSV file as a header list plus one map per record.
#[derive(Debug, Clone, Default)]
pub struct CsvRows {
    pub headers: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl CsvRows {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Fails with [`IngestError::MissingColumn`] unless `name` is a header.
    pub fn require_column(&self, name: &str, path: &Path) -> Result<()> {
        if self.has_column(name) {
            Ok(())
        } else {
            Err(IngestError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            })
        }
    }
}

/// Value of `key` in a row, or an empty string.
pub fn get_field(row: &BTreeMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

/// Value of `key` in a row; `None` when missing or empty.
pub fn get_optional(row: &BTreeMap<String, String>, key: &str) -> Option<String> {
    row.get(key).filter(|v| !v.is_empty()).cloned()
}

/// Reads a CSV file into row maps keyed by header.
///
/// Header names lose any byte-order mark; values are trimmed.
pub fn read_csv_rows(path: &Path) -> Result<CsvRows> {
    let file = std::fs::File::open(path).map_err(|e| open_error(path, e))?;
    let parse_error = |e: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers.get(idx).cloned().unwrap_or_default();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(CsvRows { headers, rows })
}
