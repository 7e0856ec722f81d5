//! Rule-based token translation.
//!
//! Each [`TransformRule`] is compiled into three case-insensitive
//! substitutions that always run in this order:
//!
//! - the token at the very end of the name
//! - the token at the start of the name, followed by a space
//! - the token in the interior, surrounded by single spaces
//!
//! Rules run in table order and each rule sees the output of the previous
//! one, so rule order can change results.

use regex::{NoExpand, Regex, RegexBuilder};
use tracing::debug;

use vocab_model::{RuleError, TransformRule};

/// A single rule compiled into its three anchored substitutions.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: TransformRule,
    at_end: Regex,
    at_start: Regex,
    in_middle: Regex,
    start_replacement: String,
    middle_replacement: String,
}

impl CompiledRule {
    /// Compiles a rule. The non-standard token is matched literally.
    pub fn compile(index: usize, rule: &TransformRule) -> Result<Self, RuleError> {
        if rule.non_standard.is_empty() {
            return Err(RuleError::EmptyToken { index });
        }
        let token = regex::escape(&rule.non_standard);
        let build = |pattern: String| {
            RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .map_err(|error| RuleError::InvalidPattern {
                    index,
                    token: rule.non_standard.clone(),
                    message: error.to_string(),
                })
        };
        Ok(Self {
            rule: rule.clone(),
            at_end: build(format!("{token}$"))?,
            at_start: build(format!("^{token} "))?,
            in_middle: build(format!(" {token} "))?,
            start_replacement: format!("{} ", rule.standard),
            middle_replacement: format!(" {} ", rule.standard),
        })
    }

    pub fn rule(&self) -> &TransformRule {
        &self.rule
    }

    pub fn replace_at_end(&self, name: &str) -> String {
        self.at_end
            .replace_all(name, NoExpand(&self.rule.standard))
            .into_owned()
    }

    pub fn replace_at_start(&self, name: &str) -> String {
        self.at_start
            .replace_all(name, NoExpand(&self.start_replacement))
            .into_owned()
    }

    pub fn replace_in_middle(&self, name: &str) -> String {
        self.in_middle
            .replace_all(name, NoExpand(&self.middle_replacement))
            .into_owned()
    }

    /// Runs end, start and interior substitutions in that order.
    pub fn apply(&self, name: &str) -> String {
        let name = self.replace_at_end(name);
        let name = self.replace_at_start(&name);
        self.replace_in_middle(&name)
    }
}

/// An ordered, compiled rule table.
///
/// Compile once per run and reuse for every name.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn compile(rules: &[TransformRule]) -> Result<Self, RuleError> {
        let rules = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| CompiledRule::compile(index, rule))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(rule_count = rules.len(), "compiled transform rules");
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Applies every rule, in order, to one name.
    pub fn apply(&self, name: &str) -> String {
        self.rules
            .iter()
            .fold(name.to_string(), |current, rule| rule.apply(&current))
    }

    /// Applies every rule to every name.
    ///
    /// Rules are the outer loop: the whole sequence passes through rule `n`
    /// before rule `n + 1` sees it.
    pub fn translate<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let mut current: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        for rule in &self.rules {
            current = current.iter().map(|name| rule.apply(name)).collect();
        }
        current
    }
}

/// Compiles `rules` and translates `names` in one call.
pub fn translate<S: AsRef<str>>(
    names: &[S],
    rules: &[TransformRule],
) -> Result<Vec<String>, RuleError> {
    Ok(RuleSet::compile(rules)?.translate(names))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(non_standard: &str, standard: &str) -> CompiledRule {
        CompiledRule::compile(0, &TransformRule::new(non_standard, standard)).unwrap()
    }

    #[test]
    fn replaces_token_at_end() {
        let id = rule("id", "Identifier");
        assert_eq!(id.replace_at_end("Cust Id"), "Cust Identifier");
        assert_eq!(id.replace_at_end("Cust ID"), "Cust Identifier");
        assert_eq!(id.replace_at_end("Id Cust"), "Id Cust");
    }

    #[test]
    fn end_anchor_is_not_a_word_boundary() {
        let id = rule("id", "Identifier");
        assert_eq!(id.replace_at_end("Paid"), "PaIdentifier");
    }

    #[test]
    fn replaces_token_at_start_only_before_space() {
        let cust = rule("cust", "Customer");
        assert_eq!(cust.replace_at_start("Cust Id"), "Customer Id");
        assert_eq!(cust.replace_at_start("Custom Id"), "Custom Id");
        assert_eq!(cust.replace_at_start("Cust"), "Cust");
    }

    #[test]
    fn replaces_token_in_middle_between_spaces() {
        let nbr = rule("nbr", "Number");
        assert_eq!(nbr.replace_in_middle("Acct Nbr Type"), "Acct Number Type");
        assert_eq!(nbr.replace_in_middle("Acct Nbr"), "Acct Nbr");
    }

    #[test]
    fn interior_matches_do_not_overlap() {
        let id = rule("id", "Identifier");
        assert_eq!(id.replace_in_middle("A Id Id B"), "A Identifier Id B");
    }

    #[test]
    fn sub_steps_run_end_then_start_then_middle() {
        let id = rule("id", "Identifier");
        assert_eq!(id.apply("Id Id Id"), "Identifier Identifier Identifier");
    }

    #[test]
    fn tokens_are_literal() {
        let no = rule("no.", "Number");
        assert_eq!(no.apply("Acct No."), "Acct Number");
        assert_eq!(no.apply("Acct Nox"), "Acct Nox");
    }

    #[test]
    fn replacement_is_literal() {
        let cost = rule("amt", "$Amount");
        assert_eq!(cost.apply("Loan Amt"), "Loan $Amount");
    }

    #[test]
    fn later_rules_see_earlier_output() {
        let rules = vec![
            TransformRule::new("cust", "Customer"),
            TransformRule::new("customer id", "Customer Identifier"),
        ];
        let out = translate(&["Cust Id"], &rules).unwrap();
        assert_eq!(out, vec!["Customer Identifier"]);

        let reversed: Vec<TransformRule> = rules.into_iter().rev().collect();
        let out = translate(&["Cust Id"], &reversed).unwrap();
        assert_eq!(out, vec!["Customer Id"]);
    }

    #[test]
    fn empty_rule_table_is_identity() {
        let names = vec!["Cust Id".to_string(), "Acct Nbr".to_string()];
        assert_eq!(translate(&names, &[]).unwrap(), names);
    }

    #[test]
    fn empty_token_is_rejected() {
        let error = RuleSet::compile(&[TransformRule::new("", "X")]).unwrap_err();
        assert_eq!(error, RuleError::EmptyToken { index: 0 });
    }
}
