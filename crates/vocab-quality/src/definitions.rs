//! Definition consistency scoring.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use vocab_model::DefinitionScore;
use vocab_normalize::clean_definition;

/// A `(name, definition)` pair as read from one table row.
pub type DefinitionRow<'a> = (Option<&'a str>, Option<&'a str>);

fn present(definition: Option<&str>) -> Option<&str> {
    definition.filter(|d| !d.is_empty())
}

/// Distinct non-missing definitions per name.
///
/// Rows without a name form their own group under `None`.
pub fn group_definitions<'a>(
    rows: &[DefinitionRow<'a>],
) -> BTreeMap<Option<&'a str>, BTreeSet<&'a str>> {
    let mut groups: BTreeMap<Option<&str>, BTreeSet<&str>> = BTreeMap::new();
    for &(name, definition) in rows {
        let distinct = groups.entry(name).or_default();
        if let Some(definition) = present(definition) {
            distinct.insert(definition);
        }
    }
    groups
}

/// Scores every row against the other rows sharing its name.
///
/// Definitions are compared byte for byte. A row with no definition (absent
/// or empty) scores [`DefinitionScore::Missing`] whatever its group looks
/// like, and never affects the score of its siblings.
pub fn score_definitions(rows: &[DefinitionRow<'_>]) -> Vec<DefinitionScore> {
    let groups = group_definitions(rows);
    let conflicting = groups.values().filter(|defs| defs.len() > 1).count();
    debug!(names = groups.len(), conflicting, "grouped definitions by name");
    rows.iter()
        .map(|&(name, definition)| {
            if present(definition).is_none() {
                return DefinitionScore::Missing;
            }
            match groups.get(&name).map(BTreeSet::len) {
                Some(distinct) if distinct > 1 => DefinitionScore::Conflicting,
                _ => DefinitionScore::Consistent,
            }
        })
        .collect()
}

/// Cleans a column of definitions; see [`clean_definition`].
pub fn clean_definitions(definitions: &[Option<&str>]) -> Vec<String> {
    definitions.iter().map(|d| clean_definition(*d)).collect()
}

/// How many rows received each score.
pub fn score_distribution(scores: &[DefinitionScore]) -> BTreeMap<DefinitionScore, usize> {
    let mut counts = BTreeMap::new();
    for score in scores {
        *counts.entry(*score).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_definitions_are_consistent() {
        let rows = [
            (Some("Cust Id"), Some("a customer id")),
            (Some("Cust Id"), Some("a customer id")),
        ];
        assert_eq!(
            score_definitions(&rows),
            vec![DefinitionScore::Consistent, DefinitionScore::Consistent]
        );
    }

    #[test]
    fn own_missing_definition_scores_zero() {
        let rows = [
            (Some("Cust Id"), Some("a customer id")),
            (Some("Cust Id"), None),
            (Some("Cust Id"), Some("")),
        ];
        assert_eq!(
            score_definitions(&rows),
            vec![
                DefinitionScore::Consistent,
                DefinitionScore::Missing,
                DefinitionScore::Missing,
            ]
        );
    }

    #[test]
    fn differing_definitions_conflict_despite_missing_sibling() {
        let rows = [
            (Some("Cust Id"), Some("a customer id")),
            (Some("Cust Id"), Some("different text")),
            (Some("Cust Id"), None),
        ];
        assert_eq!(
            score_definitions(&rows),
            vec![
                DefinitionScore::Conflicting,
                DefinitionScore::Conflicting,
                DefinitionScore::Missing,
            ]
        );
    }

    #[test]
    fn comparison_is_byte_exact() {
        let rows = [
            (Some("Amount"), Some("Money owed")),
            (Some("Amount"), Some("money owed")),
        ];
        assert!(
            score_definitions(&rows)
                .iter()
                .all(|s| *s == DefinitionScore::Conflicting)
        );
    }

    #[test]
    fn names_are_scored_independently() {
        let rows = [
            (Some("A"), Some("one")),
            (Some("B"), Some("two")),
            (Some("B"), Some("three")),
            (None, Some("four")),
        ];
        assert_eq!(
            score_definitions(&rows),
            vec![
                DefinitionScore::Consistent,
                DefinitionScore::Conflicting,
                DefinitionScore::Conflicting,
                DefinitionScore::Consistent,
            ]
        );
    }

    #[test]
    fn distribution_counts_scores() {
        let scores = [
            DefinitionScore::Missing,
            DefinitionScore::Consistent,
            DefinitionScore::Consistent,
        ];
        let counts = score_distribution(&scores);
        assert_eq!(counts.get(&DefinitionScore::Consistent), Some(&2));
        assert_eq!(counts.get(&DefinitionScore::Missing), Some(&1));
        assert_eq!(counts.get(&DefinitionScore::Conflicting), None);
    }

    #[test]
    fn cleans_definitions() {
        assert_eq!(
            clean_definitions(&[Some("  a  b "), None]),
            vec!["a b".to_string(), String::new()]
        );
    }
}
