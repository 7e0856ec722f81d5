//! Field-name configuration files.

use std::path::Path;

use vocab_model::FieldNames;

use crate::error::{IngestError, Result, open_error};

/// Reads a TOML file overriding any subset of the default column names.
pub fn load_field_names(path: &Path) -> Result<FieldNames> {
    let text = std::fs::read_to_string(path).map_err(|e| open_error(path, e))?;
    toml::from_str(&text).map_err(|e| IngestError::FieldConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
