use serde::{Deserialize, Serialize};

/// Consistency of a row's definition with the other rows sharing its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionScore {
    /// The row has no definition.
    Missing = 0,
    /// Rows with the same name carry different definitions.
    Conflicting = 1,
    /// Every defined row with the same name carries the same definition.
    Consistent = 2,
}

impl DefinitionScore {
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`DefinitionScore::value`].
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Missing),
            1 => Some(Self::Conflicting),
            2 => Some(Self::Consistent),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Conflicting => "conflicting",
            Self::Consistent => "consistent",
        }
    }
}

impl From<DefinitionScore> for u8 {
    fn from(score: DefinitionScore) -> Self {
        score.value()
    }
}

/// Number of rows sharing a name.
pub type InstanceCount = usize;
