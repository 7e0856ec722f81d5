//! Match candidates, best-match outcomes and matcher options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Term reported when no candidate cleared the threshold.
pub const NO_MATCHES: &str = "no matches";
/// Term reported when the two best candidates share the top score.
pub const MULTIPLE_MATCHES: &str = "multiple matches";

/// A vocabulary term paired with its similarity score (0-100).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub term: String,
    pub score: u8,
}

impl MatchCandidate {
    pub fn new(term: impl Into<String>, score: u8) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

impl fmt::Display for MatchCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.term, self.score)
    }
}

/// Renders a ranked candidate list as `Term (95); Other (80)`.
pub fn format_candidates(candidates: &[MatchCandidate]) -> String {
    candidates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Outcome of selecting a single winner from a ranked candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BestMatch {
    /// Exactly one candidate holds the top score.
    Unique { term: String, score: u8 },
    /// At least two candidates share the top score.
    Multiple { score: u8 },
    /// The candidate list was empty.
    NoMatches,
}

impl BestMatch {
    /// Term to report: the winner, or one of the sentinel strings.
    pub fn term(&self) -> &str {
        match self {
            Self::Unique { term, .. } => term,
            Self::Multiple { .. } => MULTIPLE_MATCHES,
            Self::NoMatches => NO_MATCHES,
        }
    }

    pub fn score(&self) -> u8 {
        match self {
            Self::Unique { score, .. } | Self::Multiple { score } => *score,
            Self::NoMatches => 0,
        }
    }

    /// The winning term, only when the match is unambiguous.
    pub fn unique_term(&self) -> Option<&str> {
        match self {
            Self::Unique { term, .. } => Some(term),
            _ => None,
        }
    }

    pub fn kind(&self) -> MatchOutcome {
        match self {
            Self::Unique { .. } => MatchOutcome::Unique,
            Self::Multiple { .. } => MatchOutcome::Multiple,
            Self::NoMatches => MatchOutcome::NoMatches,
        }
    }

    /// `(term, score)` in the shape result tables carry.
    pub fn as_pair(&self) -> (&str, u8) {
        (self.term(), self.score())
    }
}

/// Coarse classification of a [`BestMatch`], used for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Unique,
    Multiple,
    NoMatches,
}

impl MatchOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unique => "unique match",
            Self::Multiple => MULTIPLE_MATCHES,
            Self::NoMatches => NO_MATCHES,
        }
    }
}

/// Settings for one matching run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Candidates must score strictly above this value (0-100).
    pub threshold: u8,
    /// Maximum number of candidates kept per name (> 0).
    pub max_matches: usize,
    /// Verify candidate ordering before picking a winner.
    pub strict_ordering: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: 70,
            max_matches: 40,
            strict_ordering: false,
        }
    }
}

impl MatchOptions {
    pub fn new(threshold: u8, max_matches: usize) -> Self {
        Self {
            threshold,
            max_matches,
            strict_ordering: false,
        }
    }

    #[must_use]
    pub fn strict(mut self, enable: bool) -> Self {
        self.strict_ordering = enable;
        self
    }
}

/// Full matching result for one input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Position of the row in the table it came from.
    pub row: usize,
    pub entity_name: Option<String>,
    pub attribute_name: String,
    pub candidates: Vec<MatchCandidate>,
    pub best: BestMatch,
}
