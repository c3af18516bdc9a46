use uuid::Uuid;
use vizlisting_core::{VizType, VizValidationError, Visualization};

#[test]
fn new_assigns_identity_and_creation_time() {
    let viz = Visualization::new(VizType::Markdown, "Hello World").unwrap();

    assert!(!viz.uuid.is_nil());
    assert_eq!(viz.kind, VizType::Markdown);
    assert_eq!(viz.name, "Hello World");
    assert!(viz.created_at > 0);
}

#[test]
fn new_rejects_empty_and_whitespace_names() {
    let err = Visualization::new(VizType::Markdown, "").unwrap_err();
    assert_eq!(err, VizValidationError::EmptyName);

    let err = Visualization::new(VizType::Table, " \t ").unwrap_err();
    assert_eq!(err, VizValidationError::EmptyName);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Visualization::with_id(Uuid::nil(), VizType::Metric, "invalid").unwrap_err();
    assert_eq!(err, VizValidationError::NilUuid);
}

#[test]
fn name_casing_is_preserved_in_storage_shape() {
    let viz = Visualization::new(VizType::Markdown, "MiXeD CaSe").unwrap();
    assert_eq!(viz.name, "MiXeD CaSe");
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let viz_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let viz = Visualization::with_id(viz_id, VizType::Markdown, "Visualize Listing Test").unwrap();

    let json = serde_json::to_value(&viz).unwrap();
    assert_eq!(json["uuid"], viz_id.to_string());
    assert_eq!(json["type"], "markdown");
    assert_eq!(json["name"], "Visualize Listing Test");
    assert_eq!(json["created_at"], viz.created_at);

    let decoded: Visualization = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, viz);
}
