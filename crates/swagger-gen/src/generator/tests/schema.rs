use serde_json::json;

use crate::generator::{
  errors::GeneratorError,
  schema::{AdditionalProperties, SwaggerDocument, ref_name},
  tests::support::{document, schema},
};

#[test]
fn validate_accepts_a_minimal_document() {
  let document = document(json!({}));
  assert!(document.validate().is_ok());
}

#[test]
fn validate_reports_each_missing_header_field() {
  let mut doc = document(json!({}));
  doc.swagger = None;
  let error = doc.validate().unwrap_err();
  assert!(matches!(
    error,
    GeneratorError::InvalidSwaggerDocument(ref message) if message.contains("'swagger' version field")
  ));

  let mut doc = document(json!({}));
  doc.swagger = Some("3.0.1".to_string());
  let error = doc.validate().unwrap_err();
  assert!(matches!(
    error,
    GeneratorError::InvalidSwaggerDocument(ref message) if message.contains("unsupported swagger version '3.0.1'")
  ));

  let mut doc = document(json!({}));
  doc.info = None;
  let error = doc.validate().unwrap_err();
  assert!(matches!(
    error,
    GeneratorError::InvalidSwaggerDocument(ref message) if message.contains("'info' block")
  ));

  let mut doc = document(json!({}));
  doc.info.as_mut().unwrap().title = String::new();
  let error = doc.validate().unwrap_err();
  assert!(matches!(
    error,
    GeneratorError::InvalidSwaggerDocument(ref message) if message.contains("'info.title'")
  ));

  let mut doc = document(json!({}));
  doc.info.as_mut().unwrap().version = String::new();
  let error = doc.validate().unwrap_err();
  assert!(matches!(
    error,
    GeneratorError::InvalidSwaggerDocument(ref message) if message.contains("'info.version'")
  ));
}

#[test]
fn load_rejects_a_missing_file() {
  let error = SwaggerDocument::load(std::path::Path::new("/nonexistent/swagger.json")).unwrap_err();
  assert!(matches!(error, GeneratorError::FileNotFound(_)));
}

#[test]
fn additional_properties_keeps_its_three_states_distinct() {
  let none = schema(json!({"type": "object", "additionalProperties": false}));
  assert_eq!(none.additional_properties, Some(AdditionalProperties::NoExtra));

  let any = schema(json!({"type": "object", "additionalProperties": true}));
  assert_eq!(any.additional_properties, Some(AdditionalProperties::AnyExtra));

  let constrained = schema(json!({
    "type": "object",
    "additionalProperties": {"type": "string"}
  }));
  match constrained.additional_properties {
    Some(AdditionalProperties::Constrained(ref inner)) => {
      assert_eq!(inner.schema_type.as_deref(), Some("string"));
    }
    ref other => panic!("expected a constrained schema, got {other:?}"),
  }

  let absent = schema(json!({"type": "object"}));
  assert_eq!(absent.additional_properties, None);
}

#[test]
fn property_order_survives_a_parse_round_trip() {
  let parsed = schema(json!({
    "type": "object",
    "properties": {
      "zulu": {"type": "string"},
      "alpha": {"type": "integer"},
      "mike": {"type": "boolean"}
    }
  }));
  let keys: Vec<&str> = parsed.properties.keys().map(String::as_str).collect();
  assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
}

#[test]
fn equivalence_ignores_descriptions_and_ordering() {
  let left = schema(json!({
    "type": "object",
    "description": "a user",
    "required": ["id", "name"],
    "properties": {
      "id": {"type": "integer", "format": "int64"},
      "name": {"type": "string", "enum": ["a", "b"]}
    }
  }));
  let right = schema(json!({
    "type": "object",
    "description": "a totally different description",
    "required": ["name", "id"],
    "properties": {
      "id": {"type": "integer", "format": "int64", "description": "pk"},
      "name": {"type": "string", "enum": ["b", "a"]}
    }
  }));
  assert!(left.equivalent(&right));
}

#[test]
fn equivalence_rejects_differing_constraints() {
  let left = schema(json!({"type": "string", "minLength": 1}));
  let right = schema(json!({"type": "string", "minLength": 2}));
  assert!(!left.equivalent(&right));

  let left = schema(json!({"type": "object", "properties": {"id": {"type": "integer"}}}));
  let right = schema(json!({"type": "object", "properties": {"id": {"type": "string"}}}));
  assert!(!left.equivalent(&right));
}

#[test]
fn equivalence_recurses_into_items_and_all_of() {
  let left = schema(json!({
    "allOf": [
      {"$ref": "#/definitions/Base"},
      {"type": "object", "properties": {"tags": {"type": "array", "items": {"type": "string"}}}}
    ]
  }));
  let right = left.clone();
  assert!(left.equivalent(&right));

  let different = schema(json!({
    "allOf": [
      {"$ref": "#/definitions/Base"},
      {"type": "object", "properties": {"tags": {"type": "array", "items": {"type": "integer"}}}}
    ]
  }));
  assert!(!left.equivalent(&different));
}

#[test]
fn ref_names_are_extracted_from_pointers() {
  assert_eq!(ref_name("#/definitions/Pet"), Some("Pet"));
  assert_eq!(ref_name("definitions.json#/Order"), Some("Order"));
  assert_eq!(ref_name("#/definitions/"), None);
}
