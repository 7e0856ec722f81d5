use polars::prelude::PolarsError;
use thiserror::Error;

use vocab_model::{FormatError, MatchError, RuleError};

/// Failures of a pipeline run.
///
/// [`PipelineError::Format`] is the one callers are expected to branch on:
/// it means the input table does not have the required shape.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(transparent)]
    Rule(#[from] RuleError),
    #[error("table operation failed: {0}")]
    Frame(#[from] PolarsError),
}

impl PipelineError {
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            Self::Format(error) => Some(error),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
