//! Machine-readable run report.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::pipeline::{MatchRun, ScoreRun};

/// Summary of one run, written as JSON with `--report`.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub command: String,
    pub generated_at: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropped_rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_terms: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_matches: Option<usize>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub match_outcomes: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub definition_scores: BTreeMap<String, usize>,
    pub duration_ms: u128,
}

impl RunReport {
    fn new(command: &str, input: &Path, output: &Path, rows: usize) -> Self {
        Self {
            command: command.to_string(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            rows,
            dropped_rows: None,
            vocabulary_terms: None,
            threshold: None,
            max_matches: None,
            match_outcomes: BTreeMap::new(),
            definition_scores: BTreeMap::new(),
            duration_ms: 0,
        }
    }

    pub fn for_match(input: &Path, run: &MatchRun, threshold: u8, max_matches: usize) -> Self {
        let mut report = Self::new("match", input, &run.output, run.rows);
        report.dropped_rows = Some(run.dropped_rows);
        report.vocabulary_terms = Some(run.vocabulary_terms);
        report.threshold = Some(threshold);
        report.max_matches = Some(max_matches);
        report.match_outcomes = run
            .outcomes
            .iter()
            .map(|(outcome, count)| (outcome.label().to_string(), *count))
            .collect();
        report
    }

    pub fn for_scores(command: &str, input: &Path, run: &ScoreRun) -> Self {
        let mut report = Self::new(command, input, &run.output, run.rows);
        report.definition_scores = run
            .scores
            .iter()
            .map(|(score, count)| (score.label().to_string(), *count))
            .collect();
        report
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u128) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("create report file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("write report to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use vocab_model::{DefinitionScore, MatchOutcome};

    use super::*;

    #[test]
    fn match_report_labels_outcomes() {
        let run = MatchRun {
            output: PathBuf::from("Matched_Vocab.csv"),
            rows: 3,
            dropped_rows: 1,
            vocabulary_terms: 10,
            outcomes: BTreeMap::from([(MatchOutcome::Unique, 2), (MatchOutcome::NoMatches, 1)]),
        };
        let report = RunReport::for_match(Path::new("dictionary.csv"), &run, 70, 40);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["command"], "match");
        assert_eq!(json["match_outcomes"]["unique match"], 2);
        assert_eq!(json["match_outcomes"]["no matches"], 1);
        assert_eq!(json["threshold"], 70);
        assert!(json.get("definition_scores").is_none());
    }

    #[test]
    fn score_report_omits_match_fields() {
        let run = ScoreRun {
            output: PathBuf::from("Scored_Dictionary.csv"),
            rows: 2,
            scores: BTreeMap::from([(DefinitionScore::Conflicting, 2)]),
        };
        let report = RunReport::for_scores("score", Path::new("dictionary.csv"), &run);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["definition_scores"]["conflicting"], 2);
        assert!(json.get("threshold").is_none());
        assert!(json["generated_at"].as_str().unwrap().ends_with('Z'));
    }
}
