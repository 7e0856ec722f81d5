//! Pre-processed reference vocabulary.

use std::collections::BTreeMap;

use tracing::debug;

use vocab_model::VocabularyEntry;
use vocab_normalize::title_case;

use crate::score::PreparedText;

#[derive(Debug, Clone)]
struct IndexedTerm {
    entry: VocabularyEntry,
    prepared: PreparedText,
}

/// A vocabulary whose terms have been normalized for scoring once, up front.
///
/// Iteration order is the order candidates are discovered in, which decides
/// how equal scores are ranked.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    terms: Vec<IndexedTerm>,
    by_term: BTreeMap<String, usize>,
}

impl VocabularyIndex {
    /// Indexes entries exactly as given, keeping their order.
    ///
    /// Later duplicates of a term are ignored.
    pub fn new(entries: impl IntoIterator<Item = VocabularyEntry>) -> Self {
        let mut index = Self::default();
        for entry in entries {
            if index.by_term.contains_key(&entry.term) {
                continue;
            }
            index.by_term.insert(entry.term.clone(), index.terms.len());
            let prepared = PreparedText::new(&entry.term);
            index.terms.push(IndexedTerm { entry, prepared });
        }
        index
    }

    /// Prepares a raw vocabulary table and indexes it.
    ///
    /// Blank terms are dropped, the rest are title-cased, deduplicated and
    /// sorted. The first definition seen for a term is kept.
    pub fn from_entries(entries: impl IntoIterator<Item = VocabularyEntry>) -> Self {
        let mut prepared: BTreeMap<String, Option<String>> = BTreeMap::new();
        let mut dropped = 0usize;
        for entry in entries {
            if entry.term.trim().is_empty() {
                dropped += 1;
                continue;
            }
            let definition = entry.definition.filter(|d| !d.trim().is_empty());
            let slot = prepared.entry(title_case(&entry.term)).or_insert(None);
            if slot.is_none() {
                *slot = definition;
            }
        }
        if dropped > 0 {
            debug!(dropped, "dropped blank vocabulary terms");
        }
        Self::new(
            prepared
                .into_iter()
                .map(|(term, definition)| VocabularyEntry { term, definition }),
        )
    }

    /// Builds an index from bare terms with no definitions.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_entries(terms.into_iter().map(VocabularyEntry::new))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in iteration order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.entry.term.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.terms.iter().map(|t| &t.entry)
    }

    /// Definition recorded for `term`, if the vocabulary carries one.
    pub fn definition(&self, term: &str) -> Option<&str> {
        self.by_term
            .get(term)
            .and_then(|&idx| self.terms[idx].entry.definition.as_deref())
    }

    /// Whether any entry carries a definition.
    pub fn has_definitions(&self) -> bool {
        self.terms.iter().any(|t| t.entry.definition.is_some())
    }

    pub(crate) fn prepared(&self) -> impl Iterator<Item = (&str, &PreparedText)> {
        self.terms
            .iter()
            .map(|t| (t.entry.term.as_str(), &t.prepared))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_entries_title_cases_dedupes_and_sorts() {
        let index = VocabularyIndex::from_entries([
            VocabularyEntry::new("order date"),
            VocabularyEntry::new("  "),
            VocabularyEntry::new("CUSTOMER IDENTIFIER").with_definition("first"),
            VocabularyEntry::new("customer identifier").with_definition("second"),
        ]);
        let terms: Vec<&str> = index.terms().collect();
        assert_eq!(terms, vec!["Customer Identifier", "Order Date"]);
        assert_eq!(index.definition("Customer Identifier"), Some("first"));
        assert_eq!(index.definition("Order Date"), None);
        assert!(index.has_definitions());
    }

    #[test]
    fn new_keeps_given_order() {
        let index = VocabularyIndex::new([VocabularyEntry::new("B"), VocabularyEntry::new("A")]);
        assert_eq!(index.terms().collect::<Vec<_>>(), vec!["B", "A"]);
    }

    #[test]
    fn blank_definition_does_not_shadow_a_later_one() {
        let index = VocabularyIndex::from_entries([
            VocabularyEntry::new("Amount").with_definition(" "),
            VocabularyEntry::new("amount").with_definition("money"),
        ]);
        assert_eq!(index.definition("Amount"), Some("money"));
    }
}
