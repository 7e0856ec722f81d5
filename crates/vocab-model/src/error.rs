use thiserror::Error;

/// Message used whenever an input table fails the shape contract.
pub const FORMAT_CONTRACT: &str = "input must have all required fields and at least one row";

/// The input table does not have the shape a pipeline entry point requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(
        "input must have all required fields and at least one row (missing fields: {})",
        .missing.join(", ")
    )]
    MissingFields { missing: Vec<String> },
    #[error("input must have all required fields and at least one row (table has no rows)")]
    Empty,
}

impl FormatError {
    /// Fields the table was expected to carry but did not.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            Self::MissingFields { missing } => missing,
            Self::Empty => &[],
        }
    }
}

/// Errors raised by top-match selection in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error(
        "candidates are not sorted by descending score: '{term}' ({score}) follows a lower score at position {position}"
    )]
    UnsortedCandidates {
        position: usize,
        term: String,
        score: u8,
    },
}

/// A transform rule that cannot be turned into a substitution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("transform rule {index} has an empty non-standard token")]
    EmptyToken { index: usize },
    #[error("transform rule {index} ('{token}') failed to compile: {message}")]
    InvalidPattern {
        index: usize,
        token: String,
        message: String,
    },
}
