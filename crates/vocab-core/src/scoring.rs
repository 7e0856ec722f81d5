//! Definition consistency scoring over a data-dictionary table.

use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::info;

use vocab_model::{DefinitionScore, FieldNames};
use vocab_normalize::RuleSet;
use vocab_quality::{count_instances, score_definitions};

use crate::error::Result;
use crate::frame_utils::{integer_column, require_fields, string_column, string_values};

/// Scores every row of a data dictionary.
///
/// The table must carry the model, entity, attribute and attribute
/// definition fields and at least one row. The result keeps every input
/// column and adds the definition score and the instance count of the
/// attribute name.
pub fn score_data_dictionary(df: &DataFrame, fields: &FieldNames) -> Result<DataFrame> {
    require_fields(df, &fields.dictionary.required_for_scoring())?;
    score_checked(df.clone(), fields)
}

/// Standardizes attribute names before scoring them.
///
/// Spelling variants of one name (`Cust_ID`, `cust id`) are grouped
/// together. The attribute column holds the standardized name and the
/// original is kept in the old-name column.
pub fn score_standardized_dictionary(
    df: &DataFrame,
    rules: &RuleSet,
    fields: &FieldNames,
) -> Result<DataFrame> {
    require_fields(df, &fields.dictionary.required_for_scoring())?;
    let attribute = &fields.dictionary.attribute_name;
    let raw: Vec<String> = string_values(df, attribute)?
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect();
    let standardized = vocab_normalize::standardize(&raw, rules);

    let mut out = df.clone();
    out.with_column(string_column(attribute, &standardized))?;
    out.with_column(string_column(&fields.output.old_name, &raw))?;
    score_checked(out, fields)
}

fn score_checked(mut df: DataFrame, fields: &FieldNames) -> Result<DataFrame> {
    let start = Instant::now();
    let names = string_values(&df, &fields.dictionary.attribute_name)?;
    let definitions = string_values(&df, &fields.dictionary.attribute_definition)?;

    let rows: Vec<_> = names
        .iter()
        .zip(&definitions)
        .map(|(name, definition)| (name.as_deref(), definition.as_deref()))
        .collect();
    let scores = score_definitions(&rows);
    let counts = count_instances(&names);

    let score_values: Vec<u32> = scores.iter().map(|s| u32::from(s.value())).collect();
    let count_values: Vec<u32> = counts.iter().map(|&c| c as u32).collect();
    df.with_column(integer_column(&fields.output.definition_score, &score_values))?;
    df.with_column(integer_column(&fields.output.instance_count, &count_values))?;

    info!(
        rows = df.height(),
        consistent = scores
            .iter()
            .filter(|s| **s == DefinitionScore::Consistent)
            .count(),
        conflicting = scores
            .iter()
            .filter(|s| **s == DefinitionScore::Conflicting)
            .count(),
        missing = scores
            .iter()
            .filter(|s| **s == DefinitionScore::Missing)
            .count(),
        duration_ms = start.elapsed().as_millis(),
        "definition scoring complete"
    );
    Ok(df)
}
