//! File I/O for the vocabulary checker.
//!
//! Nothing outside this crate touches the filesystem for tables: data
//! dictionaries are read into `DataFrame`s, rule and vocabulary tables into
//! model types, and results are written back as CSV.

pub mod config;
pub mod error;
pub mod frame;
pub mod rows;
pub mod tables;

pub use config::load_field_names;
pub use error::{IngestError, Result};
pub use frame::{read_csv_frame, write_csv_frame};
pub use rows::{CsvRows, get_field, get_optional, read_csv_rows};
pub use tables::{load_transform_rules, load_vocabulary};
