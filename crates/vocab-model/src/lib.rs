pub mod error;
pub mod fields;
pub mod matching;
pub mod records;
pub mod scoring;

pub use error::{FORMAT_CONTRACT, FormatError, MatchError, RuleError};
pub use fields::{DictionaryFields, FieldNames, OutputFields, RuleFields, VocabularyFields};
pub use matching::{
    BestMatch, MULTIPLE_MATCHES, MatchCandidate, MatchOptions, MatchOutcome, MatchResult,
    NO_MATCHES, format_candidates,
};
pub use records::{AttributeRecord, TransformRule, VocabularyEntry};
pub use scoring::{DefinitionScore, InstanceCount};
