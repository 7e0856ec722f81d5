//! Run-parameter validation.
//!
//! Everything here runs before any table is loaded, so a bad parameter never
//! reaches the pipelines.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub const MAX_THRESHOLD: u8 = 100;

/// A run parameter the operator has to fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("threshold must be an integer between 0 and 100, got '{0}'")]
    Threshold(String),
    #[error("max matches must be an integer greater than 0, got '{0}'")]
    MaxMatches(String),
    #[error("input file not found: {0}")]
    InputMissing(PathBuf),
    #[error("input path is not a file: {0}")]
    InputNotFile(PathBuf),
}

/// Parses a match threshold in `0..=100`.
pub fn parse_threshold(raw: &str) -> Result<u8, ValidationError> {
    match raw.trim().parse::<u8>() {
        Ok(value) if value <= MAX_THRESHOLD => Ok(value),
        _ => Err(ValidationError::Threshold(raw.to_string())),
    }
}

/// Parses a positive candidate cap.
pub fn parse_max_matches(raw: &str) -> Result<usize, ValidationError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ValidationError::MaxMatches(raw.to_string())),
    }
}

/// Checks that an input path names an existing file.
pub fn validate_input_path(path: &Path) -> Result<(), ValidationError> {
    if !path.exists() {
        return Err(ValidationError::InputMissing(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(ValidationError::InputNotFile(path.to_path_buf()));
    }
    Ok(())
}
