use serde_json::json;

use crate::generator::{
  modifier::{ModifierConfiguration, PropertyRule},
  path_validator::SchemaPathValidator,
  tests::support::document,
};

fn config_with_paths(paths: &[&str]) -> ModifierConfiguration {
  let mut config = ModifierConfiguration::default();
  for path in paths {
    config.rules.insert((*path).to_string(), PropertyRule::default());
  }
  config
}

fn sample_document() -> crate::generator::schema::SwaggerDocument {
  document(json!({
    "User": {
      "type": "object",
      "properties": {
        "name": {"type": "string"},
        "address": {"$ref": "#/definitions/Address"},
        "home": {"$ref": "#/definitions/Missing"}
      }
    },
    "Address": {
      "type": "object",
      "properties": {
        "city": {"type": "string"}
      }
    }
  }))
}

#[test]
fn existing_paths_validate_cleanly() {
  let config = config_with_paths(&["User", "User.name", "Address.city"]);
  let errors = SchemaPathValidator::validate(&config, &sample_document());
  assert!(errors.is_empty());
}

#[test]
fn a_missing_property_produces_one_error() {
  let config = config_with_paths(&["User.nonexistent"]);
  let errors = SchemaPathValidator::validate(&config, &sample_document());
  assert_eq!(errors.len(), 1);
  assert_eq!(errors[0].path, "User.nonexistent");
  assert_eq!(
    errors[0].message,
    "the path 'User.nonexistent' was not found in the Swagger definition"
  );
}

#[test]
fn a_missing_root_definition_produces_one_error() {
  let config = config_with_paths(&["Ghost.name"]);
  let errors = SchemaPathValidator::validate(&config, &sample_document());
  assert_eq!(errors.len(), 1);
  assert_eq!(errors[0].path, "Ghost.name");
}

#[test]
fn wildcard_paths_are_exempt_from_validation() {
  let config = config_with_paths(&["*.Id", "User.*", "User.nonexistent"]);
  let errors = SchemaPathValidator::validate(&config, &sample_document());
  assert_eq!(errors.len(), 1);
  assert_eq!(errors[0].path, "User.nonexistent");
}

#[test]
fn nested_paths_follow_references_into_definitions() {
  let config = config_with_paths(&["User.address.city"]);
  let errors = SchemaPathValidator::validate(&config, &sample_document());
  assert!(errors.is_empty());

  let config = config_with_paths(&["User.address.street"]);
  let errors = SchemaPathValidator::validate(&config, &sample_document());
  assert_eq!(errors.len(), 1);
}

#[test]
fn an_unresolvable_reference_fails_the_path() {
  let config = config_with_paths(&["User.home.city"]);
  let errors = SchemaPathValidator::validate(&config, &sample_document());
  assert_eq!(errors.len(), 1);
  assert_eq!(errors[0].path, "User.home.city");
}

#[test]
fn inline_object_paths_descend_without_references() {
  let doc = document(json!({
    "Order": {
      "type": "object",
      "properties": {
        "details": {
          "type": "object",
          "properties": {
            "product": {"type": "string"}
          }
        }
      }
    }
  }));
  let config = config_with_paths(&["Order.details.product"]);
  assert!(SchemaPathValidator::validate(&config, &doc).is_empty());
}
