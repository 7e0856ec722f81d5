use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use vocab_cli::pipeline::{
    ENTITY_RESULT_FILE, MATCH_RESULT_FILE, MatchRun, SCORE_RESULT_FILE, ScoreRun,
    default_output_path, entities_file, load_fields, load_rules, load_vocabulary_index,
    match_file, score_file,
};
use vocab_cli::report::RunReport;
use vocab_cli::validate::validate_input_path;
use vocab_model::MatchOptions;

use crate::cli::{CommonArgs, EntitiesArgs, MatchArgs, ScoreArgs};

fn output_path(common: &CommonArgs, file_name: &str) -> PathBuf {
    common
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&common.input, file_name))
}

fn check_inputs(paths: &[&Path]) -> Result<()> {
    for path in paths {
        validate_input_path(path)?;
    }
    Ok(())
}

pub fn run_match(args: &MatchArgs) -> Result<MatchRun> {
    let common = &args.common;
    let mut inputs = vec![common.input.as_path(), args.vocabulary.as_path()];
    inputs.extend(args.rules.as_deref());
    inputs.extend(common.fields.as_deref());
    check_inputs(&inputs)?;

    let span = info_span!("match", input = %common.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let fields = load_fields(common.fields.as_deref())?;
    let rules = load_rules(args.rules.as_deref(), &fields)?;
    let vocabulary = load_vocabulary_index(&args.vocabulary, &fields)?;
    let options = MatchOptions::new(args.threshold, args.max_matches).strict(args.strict);
    let output = output_path(common, MATCH_RESULT_FILE);

    let run = match_file(&common.input, &vocabulary, &rules, &options, &fields, &output)?;
    let duration_ms = start.elapsed().as_millis();
    info!(rows = run.rows, output = %run.output.display(), duration_ms, "match run finished");

    if let Some(path) = &common.report {
        RunReport::for_match(&common.input, &run, options.threshold, options.max_matches)
            .with_duration_ms(duration_ms)
            .write_json(path)?;
    }
    Ok(run)
}

pub fn run_score(args: &ScoreArgs) -> Result<ScoreRun> {
    let common = &args.common;
    let mut inputs = vec![common.input.as_path()];
    inputs.extend(args.rules.as_deref());
    inputs.extend(common.fields.as_deref());
    check_inputs(&inputs)?;

    let span = info_span!("score", input = %common.input.display(), standardize = args.standardize);
    let _guard = span.enter();
    let start = Instant::now();

    let fields = load_fields(common.fields.as_deref())?;
    let rules = if args.standardize {
        Some(load_rules(args.rules.as_deref(), &fields)?)
    } else {
        None
    };
    let output = output_path(common, SCORE_RESULT_FILE);

    let run = score_file(&common.input, rules.as_ref(), &fields, &output)?;
    let duration_ms = start.elapsed().as_millis();
    info!(rows = run.rows, output = %run.output.display(), duration_ms, "scoring run finished");

    if let Some(path) = &common.report {
        RunReport::for_scores("score", &common.input, &run)
            .with_duration_ms(duration_ms)
            .write_json(path)?;
    }
    Ok(run)
}

pub fn run_entities(args: &EntitiesArgs) -> Result<ScoreRun> {
    let common = &args.common;
    let mut inputs = vec![common.input.as_path()];
    inputs.extend(args.rules.as_deref());
    inputs.extend(common.fields.as_deref());
    check_inputs(&inputs)?;

    let span = info_span!("entities", input = %common.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let fields = load_fields(common.fields.as_deref())?;
    let rules = load_rules(args.rules.as_deref(), &fields)?;
    let output = output_path(common, ENTITY_RESULT_FILE);

    let run = entities_file(&common.input, &rules, &fields, &output)?;
    let duration_ms = start.elapsed().as_millis();
    info!(rows = run.rows, output = %run.output.display(), duration_ms, "entity run finished");

    if let Some(path) = &common.report {
        RunReport::for_scores("entities", &common.input, &run)
            .with_duration_ms(duration_ms)
            .write_json(path)?;
    }
    Ok(run)
}
