use serde::{Deserialize, Serialize};

/// One row of an input table, reduced to the fields the core reads.
///
/// `row` is the position in the source table and serves as the join key
/// when per-row results are merged back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRecord {
    pub row: usize,
    pub entity_name: Option<String>,
    pub attribute_name: String,
    pub definition: Option<String>,
}

impl AttributeRecord {
    pub fn new(row: usize, attribute_name: impl Into<String>) -> Self {
        Self {
            row,
            entity_name: None,
            attribute_name: attribute_name.into(),
            definition: None,
        }
    }

    pub fn with_entity(mut self, entity_name: impl Into<String>) -> Self {
        self.entity_name = Some(entity_name.into());
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }
}

/// An ordered (non-standard -> standard) token substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRule {
    pub non_standard: String,
    pub standard: String,
}

impl TransformRule {
    pub fn new(non_standard: impl Into<String>, standard: impl Into<String>) -> Self {
        Self {
            non_standard: non_standard.into(),
            standard: standard.into(),
        }
    }
}

/// A canonical target term with its optional definition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub term: String,
    pub definition: Option<String>,
}

impl VocabularyEntry {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: None,
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }
}
