use vocab_model::FieldNames;

#[test]
fn defaults_match_data_dictionary_headers() {
    let fields = FieldNames::default();
    assert_eq!(
        fields.dictionary.required_for_scoring(),
        [
            "Model Name",
            "Entity Name",
            "Attribute Name",
            "Attribute/Column Definition"
        ]
    );
    assert_eq!(fields.rules.non_standard, "NonStandard");
    assert_eq!(fields.rules.standard, "Standard Logical");
    assert_eq!(fields.output.definition_score, "Definition Score");
}

#[test]
fn partial_toml_overrides_keep_defaults() {
    let fields: FieldNames = toml::from_str(
        r#"
        [dictionary]
        entity_name = "Table Name"
        attribute_name = "Column Name"

        [output]
        old_name = "Original Column Name"
        "#,
    )
    .expect("parse field names");

    assert_eq!(fields.dictionary.entity_name, "Table Name");
    assert_eq!(fields.dictionary.attribute_name, "Column Name");
    assert_eq!(fields.dictionary.model_name, "Model Name");
    assert_eq!(fields.output.old_name, "Original Column Name");
    assert_eq!(fields.output.instance_count, "Instance Count");
    assert_eq!(fields.vocabulary.term, "Attribute Name");
}

#[test]
fn empty_toml_is_default() {
    let fields: FieldNames = toml::from_str("").expect("parse empty");
    assert_eq!(fields, FieldNames::default());
}
