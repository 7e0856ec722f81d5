//! Library side of the `vocab-checker` binary.

pub mod logging;
pub mod pipeline;
pub mod report;
pub mod validate;
