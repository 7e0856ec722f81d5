//! Column-name configuration.
//!
//! Data dictionaries in the wild disagree on what their columns are called
//! ("Entity Name" vs "Table Name", "Attribute Name" vs "Column Name"). Every
//! pipeline entry point reads column names from a [`FieldNames`] value
//! instead of string literals. Each section can be partially overridden from
//! TOML; missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};

/// All configurable column names, grouped by the table they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    pub dictionary: DictionaryFields,
    pub rules: RuleFields,
    pub vocabulary: VocabularyFields,
    pub output: OutputFields,
}

/// Columns of a data-dictionary input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryFields {
    pub model_name: String,
    pub entity_name: String,
    pub entity_definition: String,
    pub attribute_name: String,
    pub attribute_definition: String,
    /// Marker column used by the entity run: rows with a value here are excluded.
    pub exclusion_marker: String,
}

impl Default for DictionaryFields {
    fn default() -> Self {
        Self {
            model_name: "Model Name".to_string(),
            entity_name: "Entity Name".to_string(),
            entity_definition: "Entity/Table Definition".to_string(),
            attribute_name: "Attribute Name".to_string(),
            attribute_definition: "Attribute/Column Definition".to_string(),
            exclusion_marker: "Common Entity".to_string(),
        }
    }
}

impl DictionaryFields {
    /// Fields a data dictionary must carry to be scored.
    pub fn required_for_scoring(&self) -> [&str; 4] {
        [
            self.model_name.as_str(),
            self.entity_name.as_str(),
            self.attribute_name.as_str(),
            self.attribute_definition.as_str(),
        ]
    }
}

/// Columns of the transform-rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleFields {
    pub non_standard: String,
    pub standard: String,
}

impl Default for RuleFields {
    fn default() -> Self {
        Self {
            non_standard: "NonStandard".to_string(),
            standard: "Standard Logical".to_string(),
        }
    }
}

/// Columns of the master vocabulary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyFields {
    pub term: String,
    /// Optional column; vocabularies without it simply carry no definitions.
    pub definition: String,
}

impl Default for VocabularyFields {
    fn default() -> Self {
        Self {
            term: "Attribute Name".to_string(),
            definition: "Attribute/Column Definition".to_string(),
        }
    }
}

/// Columns added to result tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFields {
    pub old_name: String,
    pub old_entity_name: String,
    pub best_match_term: String,
    pub best_match_score: String,
    pub top_matches: String,
    pub vocabulary_definition: String,
    pub definition_score: String,
    pub instance_count: String,
    pub models: String,
}

impl Default for OutputFields {
    fn default() -> Self {
        Self {
            old_name: "Old Attribute Name".to_string(),
            old_entity_name: "Old Entity Name".to_string(),
            best_match_term: "Best Match Term".to_string(),
            best_match_score: "Best Match Score".to_string(),
            top_matches: "Top Matches".to_string(),
            vocabulary_definition: "Vocabulary Definition".to_string(),
            definition_score: "Definition Score".to_string(),
            instance_count: "Instance Count".to_string(),
            models: "Models".to_string(),
        }
    }
}
