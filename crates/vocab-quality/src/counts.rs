//! Occurrence counts, model membership and duplicate detection.

use std::collections::{BTreeMap, BTreeSet};

use vocab_model::InstanceCount;

/// Number of rows per distinct key.
pub fn group_counts<K: Ord>(keys: &[K]) -> BTreeMap<&K, InstanceCount> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Gives every row the size of its key group.
pub fn count_instances<K: Ord>(keys: &[K]) -> Vec<InstanceCount> {
    let counts = group_counts(keys);
    keys.iter()
        .map(|key| counts.get(key).copied().unwrap_or(0))
        .collect()
}

/// Distinct models per name, in the order they were first seen.
///
/// Rows without a model contribute nothing.
pub fn group_models<'a>(rows: &[(&'a str, Option<&'a str>)]) -> BTreeMap<&'a str, Vec<&'a str>> {
    let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for &(name, model) in rows {
        let models = groups.entry(name).or_default();
        if let Some(model) = model.filter(|m| !m.is_empty())
            && !models.contains(&model)
        {
            models.push(model);
        }
    }
    groups
}

/// Gives every row the models its name appears in, rendered as `A; B`.
pub fn models_by_name(rows: &[(&str, Option<&str>)]) -> Vec<String> {
    let groups = group_models(rows);
    rows.iter()
        .map(|(name, _)| {
            groups
                .get(name)
                .map(|models| models.join("; "))
                .unwrap_or_default()
        })
        .collect()
}

/// `true` for the first row carrying each key, `false` for later repeats.
pub fn first_occurrence_mask<K: Ord>(keys: &[K]) -> Vec<bool> {
    let mut seen = BTreeSet::new();
    keys.iter().map(|key| seen.insert(key)).collect()
}
