//! Whole-table CSV reading and writing through polars.

use std::fs::File;
use std::path::Path;

use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use tracing::{debug, warn};

use crate::error::{IngestError, Result, open_error};

/// Reads a CSV file into a `DataFrame` with every column typed as a string.
///
/// Empty cells become nulls. A UTF-8 byte-order mark on the first header is
/// removed.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    let parse_error = |e: polars::prelude::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    let bom_columns: Vec<String> = df
        .get_column_names()
        .into_iter()
        .filter(|name| name.starts_with('\u{feff}'))
        .map(ToString::to_string)
        .collect();
    for name in bom_columns {
        let clean = name.trim_start_matches('\u{feff}').to_string();
        df.rename(&name, clean.into())?;
    }

    if df.width() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if df.height() == 0 {
        warn!(path = %path.display(), "CSV file has a header but no rows");
    }
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read CSV table"
    );
    Ok(df)
}

/// Writes a `DataFrame` to `path` as comma-separated values with a header.
pub fn write_csv_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(df)
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(path = %path.display(), rows = df.height(), "wrote CSV table");
    Ok(())
}
