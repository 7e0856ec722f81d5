//! Standardize-then-match over a table of attribute names.

use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{debug, info};

use vocab_map::{VocabularyIndex, match_vocabulary};
use vocab_model::{
    AttributeRecord, FieldNames, FormatError, MatchOptions, MatchResult, format_candidates,
};
use vocab_normalize::{RuleSet, standardize};

use crate::error::Result;
use crate::frame_utils::{
    has_column, integer_column, keep_rows, non_empty, optional_string_column,
    optional_string_values, string_column, string_values,
};

/// Output of [`run_vocab_match`].
#[derive(Debug, Clone)]
pub struct MatchedTable {
    /// Input rows that had an attribute name, extended with match columns.
    pub frame: DataFrame,
    /// Per-row results, in the same order as `frame`.
    pub results: Vec<MatchResult>,
    /// Rows dropped for lacking an attribute name.
    pub dropped_rows: usize,
}

/// Standardizes every attribute name and matches it against the vocabulary.
///
/// Rows without an attribute name are dropped. Every other column passes
/// through; the attribute column is replaced by the standardized name, the
/// original goes to the old-name column, and the best term, its score and
/// the rendered candidate list are appended. When the vocabulary carries
/// definitions, the winning term's definition is appended as well.
pub fn run_vocab_match(
    df: &DataFrame,
    vocabulary: &VocabularyIndex,
    rules: &RuleSet,
    options: &MatchOptions,
    fields: &FieldNames,
) -> Result<MatchedTable> {
    let start = Instant::now();
    let attribute = fields.dictionary.attribute_name.as_str();
    if !has_column(df, attribute) {
        return Err(FormatError::MissingFields {
            missing: vec![attribute.to_string()],
        }
        .into());
    }

    let raw_names = string_values(df, attribute)?;
    let keep: Vec<bool> = raw_names
        .iter()
        .enumerate()
        .map(|(row, name)| {
            let present = non_empty(name.as_ref()).is_some();
            if !present {
                debug!(row, "dropping row without an attribute name");
            }
            present
        })
        .collect();
    let dropped_rows = keep.iter().filter(|k| !**k).count();
    let mut frame = keep_rows(df, &keep)?;

    let source_rows: Vec<usize> = keep
        .iter()
        .enumerate()
        .filter_map(|(row, kept)| kept.then_some(row))
        .collect();
    let originals: Vec<String> = raw_names
        .into_iter()
        .flatten()
        .filter(|n| !n.is_empty())
        .collect();
    let standardized = standardize(&originals, rules);
    let entities = optional_string_values(&frame, &fields.dictionary.entity_name)?;
    let definitions = optional_string_values(&frame, &fields.dictionary.attribute_definition)?;

    let records: Vec<AttributeRecord> = source_rows
        .iter()
        .zip(&standardized)
        .enumerate()
        .map(|(idx, (&row, name))| AttributeRecord {
            row,
            entity_name: entities[idx].clone(),
            attribute_name: name.clone(),
            definition: definitions[idx].clone(),
        })
        .collect();
    let results = match_vocabulary(&records, vocabulary, options)?;

    let output = &fields.output;
    let best_terms: Vec<&str> = results.iter().map(|r| r.best.term()).collect();
    let best_scores: Vec<u32> = results
        .iter()
        .map(|r| u32::from(r.best.score()))
        .collect();
    let top_matches: Vec<String> = results
        .iter()
        .map(|r| format_candidates(&r.candidates))
        .collect();

    frame.with_column(string_column(attribute, &standardized))?;
    frame.with_column(string_column(&output.old_name, &originals))?;
    frame.with_column(string_column(&output.best_match_term, &best_terms))?;
    frame.with_column(integer_column(&output.best_match_score, &best_scores))?;
    frame.with_column(string_column(&output.top_matches, &top_matches))?;
    if vocabulary.has_definitions() {
        let vocab_definitions: Vec<Option<&str>> = results
            .iter()
            .map(|r| {
                r.best
                    .unique_term()
                    .and_then(|term| vocabulary.definition(term))
            })
            .collect();
        frame.with_column(optional_string_column(
            &output.vocabulary_definition,
            &vocab_definitions,
        ))?;
    }

    info!(
        rows = frame.height(),
        dropped_rows,
        duration_ms = start.elapsed().as_millis(),
        "vocabulary match run complete"
    );
    Ok(MatchedTable {
        frame,
        results,
        dropped_rows,
    })
}
