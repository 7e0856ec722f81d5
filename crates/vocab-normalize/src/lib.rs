//! Name normalization: cosmetic canonicalization followed by rule-based
//! token translation.

pub mod canonical;
pub mod translate;

pub use canonical::{
    canonicalize, canonicalize_name, clean_definition, collapse_double_spaces,
    replace_underscores, strip, title_case,
};
pub use translate::{CompiledRule, RuleSet, translate};

/// Canonicalizes then translates a sequence of names.
pub fn standardize<S: AsRef<str>>(raw_names: &[S], rules: &RuleSet) -> Vec<String> {
    rules.translate(&canonicalize(raw_names))
}
