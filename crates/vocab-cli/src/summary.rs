use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vocab_cli::pipeline::{MatchRun, ScoreRun};
use vocab_model::{DefinitionScore, MatchOutcome};

const OUTCOMES: [MatchOutcome; 3] = [
    MatchOutcome::Unique,
    MatchOutcome::Multiple,
    MatchOutcome::NoMatches,
];

const SCORES: [DefinitionScore; 3] = [
    DefinitionScore::Consistent,
    DefinitionScore::Conflicting,
    DefinitionScore::Missing,
];

pub fn print_match_summary(run: &MatchRun) {
    println!("Output: {}", run.output.display());
    println!(
        "Rows: {} ({} without an attribute name dropped), vocabulary terms: {}",
        run.rows, run.dropped_rows, run.vocabulary_terms
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for outcome in OUTCOMES {
        let count = run.outcomes.get(&outcome).copied().unwrap_or(0);
        table.add_row(vec![
            Cell::new(outcome.label()),
            count_cell(Some(count), outcome_color(outcome)),
        ]);
    }
    add_total_row(&mut table, &run.outcomes);
    println!("{table}");
}

pub fn print_score_summary(run: &ScoreRun) {
    println!("Output: {}", run.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Definition"),
        header_cell("Score"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for score in SCORES {
        let count = run.scores.get(&score).copied().unwrap_or(0);
        table.add_row(vec![
            Cell::new(score.label()),
            dim_cell(score.value()),
            count_cell(Some(count), score_color(score)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(run.rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn add_total_row<K>(table: &mut Table, counts: &BTreeMap<K, usize>) {
    let total: usize = counts.values().sum();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
}

fn outcome_color(outcome: MatchOutcome) -> Color {
    match outcome {
        MatchOutcome::Unique => Color::Green,
        MatchOutcome::Multiple => Color::Yellow,
        MatchOutcome::NoMatches => Color::Red,
    }
}

fn score_color(score: DefinitionScore) -> Color {
    match score {
        DefinitionScore::Consistent => Color::Green,
        DefinitionScore::Conflicting => Color::Yellow,
        DefinitionScore::Missing => Color::Red,
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
