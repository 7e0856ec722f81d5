use std::io::Write;

use tempfile::NamedTempFile;

use vocab_ingest::{
    IngestError, load_field_names, load_transform_rules, load_vocabulary, read_csv_frame,
    read_csv_rows, write_csv_frame,
};
use vocab_model::{FieldNames, TransformRule, VocabularyEntry};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn reads_rule_table_in_order_and_skips_blank_tokens() {
    let file = create_temp_csv(
        "NonStandard,Standard Logical\nid,Identifier\n,Ignored\ncust,Customer\n",
    );
    let rules = load_transform_rules(file.path(), &FieldNames::default().rules).unwrap();
    assert_eq!(
        rules,
        vec![
            TransformRule::new("id", "Identifier"),
            TransformRule::new("cust", "Customer"),
        ]
    );
}

#[test]
fn rule_table_requires_both_columns() {
    let file = create_temp_csv("NonStandard\nid\n");
    let err = load_transform_rules(file.path(), &FieldNames::default().rules).unwrap_err();
    match err {
        IngestError::MissingColumn { column, .. } => assert_eq!(column, "Standard Logical"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn vocabulary_definitions_are_optional() {
    let with_defs = create_temp_csv(
        "Attribute Name,Attribute/Column Definition\nCustomer Identifier,Unique key\nOrder Date,\n",
    );
    let entries = load_vocabulary(with_defs.path(), &FieldNames::default().vocabulary).unwrap();
    assert_eq!(
        entries,
        vec![
            VocabularyEntry::new("Customer Identifier").with_definition("Unique key"),
            VocabularyEntry::new("Order Date"),
        ]
    );

    let bare = create_temp_csv("\u{feff}Attribute Name\nOrder Date\n");
    let entries = load_vocabulary(bare.path(), &FieldNames::default().vocabulary).unwrap();
    assert_eq!(entries, vec![VocabularyEntry::new("Order Date")]);
}

#[test]
fn reads_frames_as_strings() {
    let file = create_temp_csv("Entity Name,Attribute Name,Count\nT1,Cust_ID,3\nT1,,4\n");
    let df = read_csv_frame(file.path()).unwrap();
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 3);
    let counts = df.column("Count").unwrap().str().unwrap();
    assert_eq!(counts.get(0), Some("3"));
    let names = df.column("Attribute Name").unwrap().str().unwrap();
    assert_eq!(names.get(1), None);
}

#[test]
fn frame_round_trips_through_disk() {
    let source = create_temp_csv("A,B\nx,1\ny,2\n");
    let mut df = read_csv_frame(source.path()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.csv");
    write_csv_frame(&mut df, &out).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().next(), Some("A,B"));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn missing_file_is_reported() {
    let err = read_csv_frame(std::path::Path::new("/nonexistent/input.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    let err = read_csv_rows(std::path::Path::new("/nonexistent/rules.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn field_names_load_from_toml() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[dictionary]\nattribute_name = \"Column Name\"\n").unwrap();
    let fields = load_field_names(file.path()).unwrap();
    assert_eq!(fields.dictionary.attribute_name, "Column Name");
    assert_eq!(fields.dictionary.entity_name, "Entity Name");

    let mut bad = NamedTempFile::new().unwrap();
    write!(bad, "[dictionary\n").unwrap();
    assert!(matches!(
        load_field_names(bad.path()),
        Err(IngestError::FieldConfig { .. })
    ));
}
