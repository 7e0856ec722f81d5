//! Data-quality diagnostics for data dictionaries.
//!
//! Every operation here is a grouping step (a map keyed by the group value)
//! followed by a broadcast back onto the rows, so results always have one
//! entry per input row, in input order.

pub mod counts;
pub mod definitions;

pub use counts::{
    count_instances, first_occurrence_mask, group_counts, group_models, models_by_name,
};
pub use definitions::{
    DefinitionRow, clean_definitions, group_definitions, score_definitions, score_distribution,
};
