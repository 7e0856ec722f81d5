//! Entity standardization across a combined multi-model dictionary.

use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{debug, info};

use vocab_model::FieldNames;
use vocab_normalize::{RuleSet, clean_definition, standardize};
use vocab_quality::{count_instances, first_occurrence_mask, models_by_name, score_definitions};

use crate::error::Result;
use crate::frame_utils::{
    integer_column, non_empty, optional_string_column, optional_string_values, require_fields,
    string_column, string_values,
};

struct EntityRow {
    model: Option<String>,
    entity: String,
    original: String,
    definition: String,
}

/// Builds the master entity list.
///
/// Rows flagged in the exclusion-marker column and rows without an entity
/// name are left out. Entity names are standardized (the original is kept),
/// each entity gets the list of models it appears in, definitions are
/// cleaned and duplicate (entity, definition) pairs collapse to their first
/// row. The remaining rows are scored for definition consistency and
/// counted per entity.
pub fn standardize_entities(
    df: &DataFrame,
    rules: &RuleSet,
    fields: &FieldNames,
) -> Result<DataFrame> {
    let start = Instant::now();
    let dictionary = &fields.dictionary;
    require_fields(
        df,
        &[
            dictionary.model_name.as_str(),
            dictionary.entity_name.as_str(),
            dictionary.entity_definition.as_str(),
        ],
    )?;

    let models = string_values(df, &dictionary.model_name)?;
    let entities = string_values(df, &dictionary.entity_name)?;
    let definitions = string_values(df, &dictionary.entity_definition)?;
    let markers = optional_string_values(df, &dictionary.exclusion_marker)?;

    let mut kept = Vec::new();
    for (row, entity) in entities.iter().enumerate() {
        if non_empty(markers[row].as_ref()).is_some() {
            debug!(row, "skipping entity flagged in the exclusion column");
            continue;
        }
        let Some(entity) = non_empty(entity.as_ref()) else {
            debug!(row, "dropping row without an entity name");
            continue;
        };
        kept.push((row, entity.to_string()));
    }

    let originals: Vec<&str> = kept.iter().map(|(_, name)| name.as_str()).collect();
    let standardized = standardize(&originals, rules);
    let rows: Vec<EntityRow> = kept
        .iter()
        .zip(standardized)
        .map(|((row, original), entity)| EntityRow {
            model: models[*row].clone(),
            entity,
            original: original.clone(),
            definition: clean_definition(definitions[*row].as_deref()),
        })
        .collect();

    let membership: Vec<(&str, Option<&str>)> = rows
        .iter()
        .map(|r| (r.entity.as_str(), r.model.as_deref()))
        .collect();
    let model_lists = models_by_name(&membership);

    // Cleaning only merges keys, so one pass on the cleaned definition
    // removes every duplicate a raw-definition pass would.
    let keys: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.entity.as_str(), r.definition.as_str()))
        .collect();
    let first = first_occurrence_mask(&keys);
    let unique: Vec<(&EntityRow, &String)> = rows
        .iter()
        .zip(&model_lists)
        .zip(&first)
        .filter_map(|(pair, keep)| keep.then_some(pair))
        .collect();

    let scored: Vec<(Option<&str>, Option<&str>)> = unique
        .iter()
        .map(|(r, _)| (Some(r.entity.as_str()), Some(r.definition.as_str())))
        .collect();
    let scores: Vec<u32> = score_definitions(&scored)
        .iter()
        .map(|s| u32::from(s.value()))
        .collect();
    let entity_names: Vec<&str> = unique.iter().map(|(r, _)| r.entity.as_str()).collect();
    let counts: Vec<u32> = count_instances(&entity_names)
        .iter()
        .map(|&c| c as u32)
        .collect();

    let model_column: Vec<Option<&str>> = unique.iter().map(|(r, _)| r.model.as_deref()).collect();
    let old_names: Vec<&str> = unique.iter().map(|(r, _)| r.original.as_str()).collect();
    let cleaned: Vec<&str> = unique.iter().map(|(r, _)| r.definition.as_str()).collect();
    let model_lists: Vec<&str> = unique.iter().map(|(_, m)| m.as_str()).collect();

    let output = &fields.output;
    let frame = DataFrame::new(vec![
        optional_string_column(&dictionary.model_name, &model_column),
        string_column(&dictionary.entity_name, &entity_names),
        string_column(&output.old_entity_name, &old_names),
        string_column(&dictionary.entity_definition, &cleaned),
        string_column(&output.models, &model_lists),
        integer_column(&output.definition_score, &scores),
        integer_column(&output.instance_count, &counts),
    ])?;

    info!(
        input_rows = df.height(),
        kept_rows = rows.len(),
        entities = frame.height(),
        duration_ms = start.elapsed().as_millis(),
        "entity standardization complete"
    );
    Ok(frame)
}
