//! Cosmetic canonicalization of raw attribute names.
//!
//! The steps run in a fixed order and each is exposed on its own so callers
//! (and tests) can reason about them individually:
//!
//! 1. underscores become spaces
//! 2. one pass of double-space collapsing
//! 3. leading/trailing whitespace is stripped
//! 4. title casing

/// Replaces every underscore with a single space.
pub fn replace_underscores(raw: &str) -> String {
    raw.replace('_', " ")
}

/// Replaces each non-overlapping pair of spaces with one space, left to right.
///
/// This is a single pass: three spaces become two, four become two.
pub fn collapse_double_spaces(raw: &str) -> String {
    raw.replace("  ", " ")
}

/// Strips leading and trailing whitespace.
pub fn strip(raw: &str) -> String {
    raw.trim().to_string()
}

/// Title-cases a string.
///
/// A letter is uppercased when the character before it is not a letter and
/// lowercased otherwise, so `"cust id"` becomes `"Cust Id"` and `"3rd"`
/// becomes `"3Rd"`.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_cased = false;
    for ch in raw.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if cased {
            if prev_cased {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
        } else {
            out.push(ch);
        }
        prev_cased = cased;
    }
    out
}

/// Canonicalizes a single name.
pub fn canonicalize_name(raw: &str) -> String {
    let name = replace_underscores(raw);
    let name = collapse_double_spaces(&name);
    let name = strip(&name);
    title_case(&name)
}

/// Canonicalizes a sequence of names, preserving order and length.
pub fn canonicalize<S: AsRef<str>>(raw_names: &[S]) -> Vec<String> {
    raw_names
        .iter()
        .map(|name| canonicalize_name(name.as_ref()))
        .collect()
}

/// Tidies free-text definitions before they are compared.
///
/// Missing definitions become empty strings; present ones are stripped and
/// get one pass of double-space collapsing. Casing is left alone.
pub fn clean_definition(raw: Option<&str>) -> String {
    match raw {
        Some(text) => collapse_double_spaces(text.trim()),
        None => String::new(),
    }
}
