use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use vocab_core::frame_utils::string_values;
use vocab_core::{
    PipelineError, run_vocab_match, score_data_dictionary, score_standardized_dictionary,
    standardize_entities,
};
use vocab_map::VocabularyIndex;
use vocab_model::{FieldNames, FormatError, MatchOptions, TransformRule, VocabularyEntry};
use vocab_normalize::RuleSet;

fn test_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    DataFrame::new(
        columns
            .into_iter()
            .map(|(name, values)| Series::new(name.into(), values).into_column())
            .collect(),
    )
    .unwrap()
}

fn strings(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    string_values(df, name).unwrap()
}

fn integers(df: &DataFrame, name: &str) -> Vec<Option<u32>> {
    df.column(name).unwrap().u32().unwrap().into_iter().collect()
}

fn some(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some((*v).to_string())).collect()
}

fn customer_dictionary() -> DataFrame {
    test_df(vec![
        ("Model Name", vec![Some("M1"), Some("M1")]),
        ("Entity Name", vec![Some("T1"), Some("T1")]),
        ("Attribute Name", vec![Some("Cust_ID"), Some("cust id")]),
        (
            "Attribute/Column Definition",
            vec![Some("a customer id"), Some("different text")],
        ),
    ])
}

fn rules(pairs: &[(&str, &str)]) -> RuleSet {
    let rules: Vec<TransformRule> = pairs
        .iter()
        .map(|(from, to)| TransformRule::new(*from, *to))
        .collect();
    RuleSet::compile(&rules).unwrap()
}

#[test]
fn standardized_scoring_groups_spelling_variants() {
    let fields = FieldNames::default();
    let scored =
        score_standardized_dictionary(&customer_dictionary(), &RuleSet::default(), &fields)
            .unwrap();
    assert_eq!(strings(&scored, "Attribute Name"), some(&["Cust Id", "Cust Id"]));
    assert_eq!(strings(&scored, "Old Attribute Name"), some(&["Cust_ID", "cust id"]));
    assert_eq!(integers(&scored, "Definition Score"), vec![Some(1), Some(1)]);
    assert_eq!(integers(&scored, "Instance Count"), vec![Some(2), Some(2)]);
}

#[test]
fn raw_scoring_keeps_columns_and_names() {
    let fields = FieldNames::default();
    let scored = score_data_dictionary(&customer_dictionary(), &fields).unwrap();
    assert_eq!(scored.width(), 6);
    assert_eq!(strings(&scored, "Attribute Name"), some(&["Cust_ID", "cust id"]));
    assert_eq!(integers(&scored, "Definition Score"), vec![Some(2), Some(2)]);
    assert_eq!(integers(&scored, "Instance Count"), vec![Some(1), Some(1)]);
}

#[test]
fn scoring_without_definition_field_is_a_format_error() {
    let df = test_df(vec![
        ("Model Name", vec![Some("M1")]),
        ("Entity Name", vec![Some("T1")]),
        ("Attribute Name", vec![Some("Cust_ID")]),
    ]);
    let err = score_data_dictionary(&df, &FieldNames::default()).unwrap_err();
    let format = err.as_format().expect("format error");
    assert_eq!(format.missing_fields(), ["Attribute/Column Definition".to_string()]);
    assert!(
        err.to_string()
            .starts_with("input must have all required fields and at least one row")
    );
}

#[test]
fn scoring_an_empty_table_is_a_format_error() {
    let df = customer_dictionary().head(Some(0));
    let err = score_data_dictionary(&df, &FieldNames::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Format(FormatError::Empty)));
}

#[test]
fn missing_definitions_score_zero() {
    let df = test_df(vec![
        ("Model Name", vec![Some("M1"), Some("M2"), Some("M3")]),
        ("Entity Name", vec![Some("T1"), Some("T2"), Some("T3")]),
        ("Attribute Name", vec![Some("Amount"), Some("Amount"), Some("Amount")]),
        (
            "Attribute/Column Definition",
            vec![Some("money"), None, Some("money")],
        ),
    ]);
    let scored = score_data_dictionary(&df, &FieldNames::default()).unwrap();
    assert_eq!(
        integers(&scored, "Definition Score"),
        vec![Some(2), Some(0), Some(2)]
    );
    assert_eq!(
        integers(&scored, "Instance Count"),
        vec![Some(3), Some(3), Some(3)]
    );
}

#[test]
fn vocab_match_standardizes_and_enriches_rows() {
    let df = test_df(vec![
        ("Entity Name", vec![Some("Customer"), Some("Customer"), Some("Order")]),
        ("Attribute Name", vec![Some("Cust_ID"), None, Some("Order_Dt")]),
        ("Notes", vec![Some("pk"), Some("dropped"), None]),
    ]);
    let vocabulary = VocabularyIndex::from_entries([
        VocabularyEntry::new("Customer Identifier").with_definition("Unique customer key"),
        VocabularyEntry::new("Order Date"),
    ]);
    let rules = rules(&[("id", "Identifier"), ("cust", "Customer"), ("dt", "Date")]);
    let fields = FieldNames::default();

    let matched = run_vocab_match(&df, &vocabulary, &rules, &MatchOptions::default(), &fields)
        .unwrap();
    let frame = &matched.frame;
    assert_eq!(matched.dropped_rows, 1);
    assert_eq!(matched.results.len(), 2);
    assert_eq!(matched.results[1].row, 2);

    let columns: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|c| c.to_string())
        .collect();
    insta::assert_snapshot!(
        columns.join(" | "),
        @"Entity Name | Attribute Name | Notes | Old Attribute Name | Best Match Term | Best Match Score | Top Matches | Vocabulary Definition"
    );
    assert_eq!(
        strings(frame, "Attribute Name"),
        some(&["Customer Identifier", "Order Date"])
    );
    assert_eq!(strings(frame, "Old Attribute Name"), some(&["Cust_ID", "Order_Dt"]));
    assert_eq!(
        strings(frame, "Best Match Term"),
        some(&["Customer Identifier", "Order Date"])
    );
    assert_eq!(integers(frame, "Best Match Score"), vec![Some(100), Some(100)]);
    assert_eq!(
        strings(frame, "Vocabulary Definition"),
        vec![Some("Unique customer key".to_string()), None]
    );
    assert_eq!(strings(frame, "Notes"), vec![Some("pk".to_string()), None]);
    let top = strings(frame, "Top Matches");
    assert!(
        top[0]
            .as_deref()
            .unwrap()
            .starts_with("Customer Identifier (100)")
    );
}

#[test]
fn vocab_match_reports_sentinels() {
    let df = test_df(vec![("Attribute Name", vec![Some("Zzz")])]);
    let vocabulary = VocabularyIndex::from_terms(["Customer Identifier"]);
    let matched = run_vocab_match(
        &df,
        &vocabulary,
        &RuleSet::default(),
        &MatchOptions::default(),
        &FieldNames::default(),
    )
    .unwrap();
    assert_eq!(strings(&matched.frame, "Best Match Term"), some(&["no matches"]));
    assert_eq!(integers(&matched.frame, "Best Match Score"), vec![Some(0)]);
    assert_eq!(strings(&matched.frame, "Top Matches"), some(&[""]));
    assert!(matched.frame.column("Vocabulary Definition").is_err());
}

#[test]
fn vocab_match_requires_attribute_field() {
    let df = test_df(vec![("Column Name", vec![Some("Cust_ID")])]);
    let err = run_vocab_match(
        &df,
        &VocabularyIndex::default(),
        &RuleSet::default(),
        &MatchOptions::default(),
        &FieldNames::default(),
    )
    .unwrap_err();
    assert_eq!(
        err.as_format().map(FormatError::missing_fields),
        Some(&["Attribute Name".to_string()][..])
    );
}

#[test]
fn entities_are_standardized_deduplicated_and_scored() {
    let df = test_df(vec![
        (
            "Model Name",
            vec![Some("Sales"), Some("Billing"), Some("Sales"), Some("Sales"), Some("Billing")],
        ),
        (
            "Entity Name",
            vec![Some("cust"), Some("Customer"), Some("Ord"), Some("Acct"), None],
        ),
        (
            "Entity/Table Definition",
            vec![Some("A buyer"), Some("A buyer "), Some("An order"), Some("Account"), Some("x")],
        ),
        ("Common Entity", vec![None, None, None, Some("Y"), None]),
    ]);
    let rules = rules(&[("cust", "Customer"), ("ord", "Order")]);
    let entities = standardize_entities(&df, &rules, &FieldNames::default()).unwrap();

    assert_eq!(entities.height(), 2);
    assert_eq!(strings(&entities, "Entity Name"), some(&["Customer", "Order"]));
    assert_eq!(strings(&entities, "Old Entity Name"), some(&["cust", "Ord"]));
    assert_eq!(strings(&entities, "Models"), some(&["Sales; Billing", "Sales"]));
    assert_eq!(
        strings(&entities, "Entity/Table Definition"),
        some(&["A buyer", "An order"])
    );
    assert_eq!(integers(&entities, "Definition Score"), vec![Some(2), Some(2)]);
    assert_eq!(integers(&entities, "Instance Count"), vec![Some(1), Some(1)]);
}

#[test]
fn conflicting_entity_definitions_survive_dedupe() {
    let df = test_df(vec![
        ("Model Name", vec![Some("Sales"), Some("Billing")]),
        ("Entity Name", vec![Some("Customer"), Some("customer")]),
        ("Entity/Table Definition", vec![Some("A buyer"), Some("A payer")]),
    ]);
    let entities = standardize_entities(&df, &RuleSet::default(), &FieldNames::default()).unwrap();
    assert_eq!(integers(&entities, "Definition Score"), vec![Some(1), Some(1)]);
    assert_eq!(integers(&entities, "Instance Count"), vec![Some(2), Some(2)]);
}
