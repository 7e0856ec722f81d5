//! CLI argument definitions for the vocabulary checker.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use vocab_cli::validate::{parse_max_matches, parse_threshold};

#[derive(Parser)]
#[command(
    name = "vocab-checker",
    version,
    about = "Standardize, match and score the names in a data dictionary",
    long_about = "Standardize attribute and entity names in a data dictionary.\n\n\
                  Matches names against a master vocabulary, scores definition\n\
                  consistency and builds a master entity list."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Standardize attribute names and match them against a vocabulary.
    Match(MatchArgs),

    /// Score definition consistency and count name instances.
    Score(ScoreArgs),

    /// Build the master entity list of a combined data dictionary.
    Entities(EntitiesArgs),
}

/// Options shared by every subcommand.
#[derive(Args)]
pub struct CommonArgs {
    /// Data dictionary CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Result CSV (default: a fixed file name next to INPUT).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML file overriding the expected column names.
    #[arg(long = "fields", value_name = "PATH")]
    pub fields: Option<PathBuf>,

    /// Also write a JSON run report.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Master vocabulary CSV.
    #[arg(long = "vocabulary", value_name = "PATH")]
    pub vocabulary: PathBuf,

    /// Transform-rule CSV mapping abbreviations to standard words.
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Candidates must score strictly above this value (0-100).
    #[arg(long = "threshold", default_value = "70", value_parser = parse_threshold)]
    pub threshold: u8,

    /// Maximum number of candidates kept per name.
    #[arg(long = "max-matches", default_value = "40", value_parser = parse_max_matches)]
    pub max_matches: usize,

    /// Fail when a candidate list is not sorted by descending score.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Args)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Standardize attribute names before grouping them.
    ///
    /// Without this flag rows are grouped by their raw attribute name, so
    /// `Cust_ID` and `cust id` count as different names.
    #[arg(long = "standardize")]
    pub standardize: bool,

    /// Transform-rule CSV used with --standardize.
    #[arg(long = "rules", value_name = "PATH", requires = "standardize")]
    pub rules: Option<PathBuf>,
}

#[derive(Args)]
pub struct EntitiesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Transform-rule CSV mapping abbreviations to standard words.
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
