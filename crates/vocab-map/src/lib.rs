//! Fuzzy matching of standardized names against a reference vocabulary.
//!
//! [`VocabularyIndex`] prepares the vocabulary once per run;
//! [`match_to_target`] ranks the terms for one name and [`get_top_match`]
//! picks the winner under the tie policy.

pub mod engine;
pub mod index;
pub mod score;

pub use engine::{
    VocabularyMatcher, get_top_match, get_top_match_checked, match_to_target, match_vocabulary,
};
pub use index::VocabularyIndex;
pub use score::{
    PreparedText, ScoreComponent, WeightedScore, partial_ratio, process, ratio, token_set_ratio,
    token_sort_ratio, weighted_components, weighted_ratio,
};
