//! Table-level pipelines for the vocabulary checker.
//!
//! Each entry point takes an in-memory `DataFrame` plus explicit parameters
//! and returns a new table; nothing here reads or writes files.
//!
//! - [`run_vocab_match`]: standardize attribute names and match them
//!   against a vocabulary
//! - [`score_data_dictionary`]: definition consistency and instance counts
//! - [`standardize_entities`]: the master entity list of a combined
//!   dictionary

pub mod entities;
pub mod error;
pub mod frame_utils;
pub mod matching;
pub mod scoring;

pub use entities::standardize_entities;
pub use error::{PipelineError, Result};
pub use matching::{MatchedTable, run_vocab_match};
pub use scoring::{score_data_dictionary, score_standardized_dictionary};
