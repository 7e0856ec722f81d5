//! Loaders for the transform-rule and vocabulary tables.

use std::path::Path;

use tracing::{debug, info};

use vocab_model::{RuleFields, TransformRule, VocabularyEntry, VocabularyFields};

use crate::error::Result;
use crate::rows::{get_field, get_optional, read_csv_rows};

/// Loads the ordered transform-rule table.
///
/// Rows whose non-standard token is empty are skipped.
pub fn load_transform_rules(path: &Path, fields: &RuleFields) -> Result<Vec<TransformRule>> {
    let table = read_csv_rows(path)?;
    table.require_column(&fields.non_standard, path)?;
    table.require_column(&fields.standard, path)?;

    let mut rules = Vec::with_capacity(table.rows.len());
    for (idx, row) in table.rows.iter().enumerate() {
        let non_standard = get_field(row, &fields.non_standard);
        if non_standard.is_empty() {
            debug!(row = idx, "skipping transform rule with an empty token");
            continue;
        }
        rules.push(TransformRule::new(
            non_standard,
            get_field(row, &fields.standard),
        ));
    }
    info!(path = %path.display(), rules = rules.len(), "loaded transform rules");
    Ok(rules)
}

/// Loads raw vocabulary entries in file order.
///
/// The definition column is optional. Terms are returned as written; blank
/// terms, casing and duplicates are dealt with when the vocabulary is
/// indexed.
pub fn load_vocabulary(path: &Path, fields: &VocabularyFields) -> Result<Vec<VocabularyEntry>> {
    let table = read_csv_rows(path)?;
    table.require_column(&fields.term, path)?;
    let has_definitions = table.has_column(&fields.definition);

    let entries: Vec<VocabularyEntry> = table
        .rows
        .iter()
        .map(|row| VocabularyEntry {
            term: get_field(row, &fields.term),
            definition: if has_definitions {
                get_optional(row, &fields.definition)
            } else {
                None
            },
        })
        .collect();
    info!(
        path = %path.display(),
        entries = entries.len(),
        has_definitions,
        "loaded vocabulary"
    );
    Ok(entries)
}
