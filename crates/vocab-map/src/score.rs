//! Lexical similarity scoring.
//!
//! The headline score is a weighted ratio in `0..=100` that takes the best of
//! several views of the two strings:
//!
//! - plain indel ratio of the processed strings
//! - best-window partial ratio (substring matches), when lengths differ a lot
//! - token-sort ratio (word order ignored)
//! - token-set ratio (shared words weighed against the leftovers)
//!
//! Token views are scaled by 0.95 and partial views by 0.9 (0.6 when one
//! string is more than eight times longer), so an exact character match
//! always wins over a reordered or partial one.
//!
//! Indel similarity comes from `rapidfuzz`. Every intermediate ratio is
//! rounded half-to-even before scaling.

use std::collections::BTreeSet;

use rapidfuzz::distance::indel;
use serde::Serialize;

const UNBASE_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.9;
const LONG_PARTIAL_SCALE: f64 = 0.6;
const PARTIAL_LENGTH_RATIO: f64 = 1.5;
const LONG_LENGTH_RATIO: f64 = 8.0;
const PARTIAL_EXACT: f64 = 0.995;

/// A string prepared once for repeated comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    processed: String,
    chars: Vec<char>,
    tokens: BTreeSet<String>,
    sorted_tokens: String,
}

impl PreparedText {
    pub fn new(raw: &str) -> Self {
        let processed = process(raw);
        let chars: Vec<char> = processed.chars().collect();
        let mut words: Vec<&str> = processed.split_whitespace().collect();
        words.sort_unstable();
        let sorted_tokens = words.join(" ");
        let tokens = words.into_iter().map(str::to_string).collect();
        Self {
            processed,
            chars,
            tokens,
            sorted_tokens,
        }
    }

    /// The lowercased, punctuation-free form used for scoring.
    pub fn processed(&self) -> &str {
        &self.processed
    }

    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }

    fn len(&self) -> usize {
        self.chars.len()
    }
}

/// Normalizes a string for scoring.
///
/// Drops non-ASCII characters, turns every other non-alphanumeric character
/// except `_` into a space, lowercases and trims. Inner runs of spaces are
/// kept.
pub fn process(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if !ch.is_ascii() {
            continue;
        }
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(' ');
        }
    }
    out.trim().to_string()
}

fn round_score(value: f64) -> f64 {
    value.round_ties_even()
}

fn to_score(value: f64) -> u8 {
    round_score(value).clamp(0.0, 100.0) as u8
}

fn indel_ratio(a: &[char], b: &[char]) -> f64 {
    indel::normalized_similarity(a.iter().copied(), b.iter().copied())
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a == b {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    round_score(100.0 * indel_ratio(a, b))
}

fn partial_ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a == b {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        let similarity = indel_ratio(shorter, window);
        if similarity > PARTIAL_EXACT {
            return 100.0;
        }
        best = best.max(similarity);
    }
    round_score(100.0 * best)
}

fn chars_of(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Indel ratio of two strings, as given (no processing).
pub fn ratio(a: &str, b: &str) -> u8 {
    to_score(ratio_chars(&chars_of(a), &chars_of(b)))
}

/// Best ratio between the shorter string and any equally long window of the
/// longer one.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    to_score(partial_ratio_chars(&chars_of(a), &chars_of(b)))
}

/// Ratio of the two strings after sorting their words.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let (a, b) = (PreparedText::new(a), PreparedText::new(b));
    to_score(token_sort(&a, &b, false))
}

/// Ratio built from the shared words and each side's leftovers.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let (a, b) = (PreparedText::new(a), PreparedText::new(b));
    to_score(token_set(&a, &b, false))
}

fn token_sort(a: &PreparedText, b: &PreparedText, partial: bool) -> f64 {
    let left = chars_of(&a.sorted_tokens);
    let right = chars_of(&b.sorted_tokens);
    if partial {
        partial_ratio_chars(&left, &right)
    } else {
        ratio_chars(&left, &right)
    }
}

fn token_set(a: &PreparedText, b: &PreparedText, partial: bool) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let join = |tokens: Vec<&String>| {
        tokens
            .into_iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    };
    let shared = join(a.tokens.intersection(&b.tokens).collect());
    let only_a = join(a.tokens.difference(&b.tokens).collect());
    let only_b = join(b.tokens.difference(&a.tokens).collect());
    let combined_a = format!("{shared} {only_a}").trim().to_string();
    let combined_b = format!("{shared} {only_b}").trim().to_string();

    let shared = chars_of(&shared);
    let combined_a = chars_of(&combined_a);
    let combined_b = chars_of(&combined_b);
    let compare = |x: &[char], y: &[char]| {
        if partial {
            partial_ratio_chars(x, y)
        } else {
            ratio_chars(x, y)
        }
    };
    compare(&shared, &combined_a)
        .max(compare(&shared, &combined_b))
        .max(compare(&combined_a, &combined_b))
}

/// Named contribution to a weighted ratio, kept for explanations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub name: &'static str,
    pub value: f64,
}

/// A weighted ratio together with the views it was chosen from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedScore {
    pub score: u8,
    pub components: Vec<ScoreComponent>,
}

impl WeightedScore {
    /// Human-readable breakdown, e.g. `ratio: 83; token set: 90`.
    pub fn explain(&self) -> String {
        self.components
            .iter()
            .map(|c| format!("{}: {:.0}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Weighted ratio of two prepared strings, with its components.
pub fn weighted_components(a: &PreparedText, b: &PreparedText) -> WeightedScore {
    if a.is_empty() || b.is_empty() {
        return WeightedScore {
            score: 0,
            components: Vec::new(),
        };
    }
    let base = ratio_chars(&a.chars, &b.chars);
    let longer = a.len().max(b.len()) as f64;
    let shorter = a.len().min(b.len()) as f64;
    let length_ratio = longer / shorter;

    let mut components = vec![ScoreComponent {
        name: "ratio",
        value: base,
    }];
    if length_ratio < PARTIAL_LENGTH_RATIO {
        components.push(ScoreComponent {
            name: "token sort",
            value: token_sort(a, b, false) * UNBASE_SCALE,
        });
        components.push(ScoreComponent {
            name: "token set",
            value: token_set(a, b, false) * UNBASE_SCALE,
        });
    } else {
        let partial_scale = if length_ratio > LONG_LENGTH_RATIO {
            LONG_PARTIAL_SCALE
        } else {
            PARTIAL_SCALE
        };
        components.push(ScoreComponent {
            name: "partial",
            value: partial_ratio_chars(&a.chars, &b.chars) * partial_scale,
        });
        components.push(ScoreComponent {
            name: "partial token sort",
            value: token_sort(a, b, true) * UNBASE_SCALE * partial_scale,
        });
        components.push(ScoreComponent {
            name: "partial token set",
            value: token_set(a, b, true) * UNBASE_SCALE * partial_scale,
        });
    }
    let best = components
        .iter()
        .map(|c| c.value)
        .fold(0.0_f64, f64::max);
    WeightedScore {
        score: to_score(best),
        components,
    }
}

/// Weighted ratio of two prepared strings.
pub fn weighted_ratio_prepared(a: &PreparedText, b: &PreparedText) -> u8 {
    weighted_components(a, b).score
}

/// Weighted ratio of two raw strings.
pub fn weighted_ratio(a: &str, b: &str) -> u8 {
    weighted_ratio_prepared(&PreparedText::new(a), &PreparedText::new(b))
}
