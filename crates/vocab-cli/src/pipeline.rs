//! File-level runs: read the input tables, call the table pipelines and
//! write the result CSV.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use polars::prelude::DataFrame;
use tracing::{debug, info};

use vocab_core::{
    run_vocab_match, score_data_dictionary, score_standardized_dictionary, standardize_entities,
};
use vocab_ingest::{
    load_field_names, load_transform_rules, load_vocabulary, read_csv_frame, write_csv_frame,
};
use vocab_map::VocabularyIndex;
use vocab_model::{DefinitionScore, FieldNames, MatchOptions, MatchOutcome};
use vocab_normalize::RuleSet;
use vocab_quality::score_distribution;

/// Result file of a match run, written next to the input by default.
pub const MATCH_RESULT_FILE: &str = "Matched_Vocab.csv";
/// Result file of a scoring run.
pub const SCORE_RESULT_FILE: &str = "Scored_Dictionary.csv";
/// Result file of an entity run.
pub const ENTITY_RESULT_FILE: &str = "Master_Entities.csv";

/// `file_name` in the directory holding `input`.
pub fn default_output_path(input: &Path, file_name: &str) -> PathBuf {
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Column names from `path`, or the defaults.
pub fn load_fields(path: Option<&Path>) -> Result<FieldNames> {
    match path {
        Some(path) => load_field_names(path)
            .with_context(|| format!("load field names from {}", path.display())),
        None => Ok(FieldNames::default()),
    }
}

/// Compiled rule table from `path`; no path means no translation.
pub fn load_rules(path: Option<&Path>, fields: &FieldNames) -> Result<RuleSet> {
    let Some(path) = path else {
        debug!("no transform rules given; names are only canonicalized");
        return Ok(RuleSet::default());
    };
    let rules = load_transform_rules(path, &fields.rules)
        .with_context(|| format!("load transform rules from {}", path.display()))?;
    let compiled = RuleSet::compile(&rules)
        .with_context(|| format!("compile transform rules from {}", path.display()))?;
    info!(path = %path.display(), rules = compiled.len(), "loaded transform rules");
    Ok(compiled)
}

/// Prepared vocabulary: title-cased, de-duplicated and sorted.
pub fn load_vocabulary_index(path: &Path, fields: &FieldNames) -> Result<VocabularyIndex> {
    let entries = load_vocabulary(path, &fields.vocabulary)
        .with_context(|| format!("load vocabulary from {}", path.display()))?;
    let loaded = entries.len();
    let index = VocabularyIndex::from_entries(entries);
    info!(
        path = %path.display(),
        loaded,
        terms = index.len(),
        "prepared vocabulary"
    );
    Ok(index)
}

fn read_input(path: &Path) -> Result<DataFrame> {
    read_csv_frame(path).with_context(|| format!("read data dictionary {}", path.display()))
}

fn write_output(frame: &mut DataFrame, path: &Path) -> Result<()> {
    write_csv_frame(frame, path).with_context(|| format!("write results to {}", path.display()))
}

/// Counts from a finished match run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRun {
    pub output: PathBuf,
    pub rows: usize,
    pub dropped_rows: usize,
    pub vocabulary_terms: usize,
    pub outcomes: BTreeMap<MatchOutcome, usize>,
}

/// Standardizes and matches the attribute names of `input` and writes the
/// enriched table to `output`.
pub fn match_file(
    input: &Path,
    vocabulary: &VocabularyIndex,
    rules: &RuleSet,
    options: &MatchOptions,
    fields: &FieldNames,
    output: &Path,
) -> Result<MatchRun> {
    let df = read_input(input)?;
    let mut matched = run_vocab_match(&df, vocabulary, rules, options, fields)?;
    write_output(&mut matched.frame, output)?;

    let mut outcomes = BTreeMap::new();
    for result in &matched.results {
        *outcomes.entry(result.best.kind()).or_insert(0) += 1;
    }
    Ok(MatchRun {
        output: output.to_path_buf(),
        rows: matched.frame.height(),
        dropped_rows: matched.dropped_rows,
        vocabulary_terms: vocabulary.len(),
        outcomes,
    })
}

/// Counts from a finished scoring or entity run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRun {
    pub output: PathBuf,
    pub rows: usize,
    pub scores: BTreeMap<DefinitionScore, usize>,
}

/// Scores the definitions of `input` and writes the scored table.
///
/// With `rules`, attribute names are standardized first so spelling variants
/// are grouped together; without, raw names are grouped as they are.
pub fn score_file(
    input: &Path,
    rules: Option<&RuleSet>,
    fields: &FieldNames,
    output: &Path,
) -> Result<ScoreRun> {
    let df = read_input(input)?;
    let mut scored = match rules {
        Some(rules) => score_standardized_dictionary(&df, rules, fields)?,
        None => score_data_dictionary(&df, fields)?,
    };
    write_output(&mut scored, output)?;
    score_run(&scored, fields, output)
}

/// Builds the master entity list of `input` and writes it.
pub fn entities_file(
    input: &Path,
    rules: &RuleSet,
    fields: &FieldNames,
    output: &Path,
) -> Result<ScoreRun> {
    let df = read_input(input)?;
    let mut entities = standardize_entities(&df, rules, fields)?;
    write_output(&mut entities, output)?;
    score_run(&entities, fields, output)
}

fn score_run(frame: &DataFrame, fields: &FieldNames, output: &Path) -> Result<ScoreRun> {
    let name = &fields.output.definition_score;
    let mut scores = Vec::with_capacity(frame.height());
    for value in frame.column(name)?.u32()?.into_iter().flatten() {
        let score = u8::try_from(value)
            .ok()
            .and_then(DefinitionScore::from_value)
            .ok_or_else(|| anyhow!("unexpected definition score {value} in column {name}"))?;
        scores.push(score);
    }
    Ok(ScoreRun {
        output: output.to_path_buf(),
        rows: frame.height(),
        scores: score_distribution(&scores),
    })
}
