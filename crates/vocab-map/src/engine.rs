//! Candidate ranking and best-match selection.

use std::time::Instant;

use tracing::{debug, info, warn};

use vocab_model::{
    AttributeRecord, BestMatch, MatchCandidate, MatchError, MatchOptions, MatchResult,
};

use crate::index::VocabularyIndex;
use crate::score::{PreparedText, weighted_ratio_prepared};

/// Scores `word` against every vocabulary term and returns the ranked
/// candidates.
///
/// The top `max_matches` scores are kept (equal scores stay in vocabulary
/// order) and then only those strictly above `threshold` survive. The
/// result is always sorted by descending score.
pub fn match_to_target(
    word: &str,
    index: &VocabularyIndex,
    threshold: u8,
    max_matches: usize,
) -> Vec<MatchCandidate> {
    rank(&PreparedText::new(word), index, threshold, max_matches)
}

fn rank(
    word: &PreparedText,
    index: &VocabularyIndex,
    threshold: u8,
    max_matches: usize,
) -> Vec<MatchCandidate> {
    let mut candidates: Vec<MatchCandidate> = index
        .prepared()
        .map(|(term, prepared)| {
            MatchCandidate::new(term, weighted_ratio_prepared(word, prepared))
        })
        .collect();
    // `sort_by` is stable, so ties keep discovery order.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(max_matches);
    candidates.retain(|c| c.score > threshold);
    candidates
}

/// Picks the winner of a ranked candidate list.
///
/// Only the first two entries are inspected: an empty list gives
/// [`BestMatch::NoMatches`], a second entry with the same score as the first
/// gives [`BestMatch::Multiple`], anything else makes the first entry the
/// winner. Callers must pass a list sorted by descending score; see
/// [`get_top_match_checked`].
pub fn get_top_match(candidates: &[MatchCandidate]) -> BestMatch {
    match candidates {
        [] => BestMatch::NoMatches,
        [first, second, ..] if first.score == second.score => BestMatch::Multiple {
            score: first.score,
        },
        [first, ..] => BestMatch::Unique {
            term: first.term.clone(),
            score: first.score,
        },
    }
}

/// Like [`get_top_match`], but rejects lists that are not sorted by
/// descending score.
pub fn get_top_match_checked(candidates: &[MatchCandidate]) -> Result<BestMatch, MatchError> {
    if let Some(position) = candidates
        .windows(2)
        .position(|pair| pair[1].score > pair[0].score)
    {
        let offender = &candidates[position + 1];
        return Err(MatchError::UnsortedCandidates {
            position: position + 1,
            term: offender.term.clone(),
            score: offender.score,
        });
    }
    Ok(get_top_match(candidates))
}

/// Matches names against one vocabulary with fixed options.
#[derive(Debug, Clone, Copy)]
pub struct VocabularyMatcher<'a> {
    index: &'a VocabularyIndex,
    options: MatchOptions,
}

impl<'a> VocabularyMatcher<'a> {
    pub fn new(index: &'a VocabularyIndex, options: MatchOptions) -> Self {
        Self { index, options }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Ranked candidates for one name.
    pub fn candidates(&self, name: &str) -> Vec<MatchCandidate> {
        match_to_target(
            name,
            self.index,
            self.options.threshold,
            self.options.max_matches,
        )
    }

    fn select(&self, candidates: &[MatchCandidate]) -> Result<BestMatch, MatchError> {
        if self.options.strict_ordering {
            get_top_match_checked(candidates)
        } else {
            Ok(get_top_match(candidates))
        }
    }

    /// Full result for one record.
    pub fn match_record(&self, record: &AttributeRecord) -> Result<MatchResult, MatchError> {
        let candidates = self.candidates(&record.attribute_name);
        let best = self.select(&candidates)?;
        if candidates.is_empty() {
            debug!(
                row = record.row,
                attribute = %record.attribute_name,
                "no vocabulary term above threshold"
            );
        }
        Ok(MatchResult {
            row: record.row,
            entity_name: record.entity_name.clone(),
            attribute_name: record.attribute_name.clone(),
            candidates,
            best,
        })
    }

    /// One result per record, in input order.
    pub fn match_all(&self, records: &[AttributeRecord]) -> Result<Vec<MatchResult>, MatchError> {
        let start = Instant::now();
        if self.index.is_empty() {
            warn!("vocabulary is empty; every name will report no matches");
        }
        let results = records
            .iter()
            .map(|record| self.match_record(record))
            .collect::<Result<Vec<_>, _>>()?;
        let matched = results
            .iter()
            .filter(|r| r.best.unique_term().is_some())
            .count();
        info!(
            rows = results.len(),
            vocabulary = self.index.len(),
            matched,
            threshold = self.options.threshold,
            max_matches = self.options.max_matches,
            duration_ms = start.elapsed().as_millis(),
            "vocabulary matching complete"
        );
        Ok(results)
    }
}

/// Matches every record against `index`.
///
/// Fails only in strict mode, when a candidate list is found unsorted.
pub fn match_vocabulary(
    records: &[AttributeRecord],
    index: &VocabularyIndex,
    options: &MatchOptions,
) -> Result<Vec<MatchResult>, MatchError> {
    VocabularyMatcher::new(index, *options).match_all(records)
}
