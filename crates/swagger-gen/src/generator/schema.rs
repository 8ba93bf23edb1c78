use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::generator::errors::GeneratorError;

const DEFINITIONS_REF_PREFIX: &str = "#/definitions/";

/// A parsed Swagger 2.0 document: version marker, `info` block and the
/// named schema definitions that drive class generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwaggerDocument {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub swagger: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub info: Option<Info>,
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub definitions: IndexMap<String, Schema>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
  pub title: String,
  pub version: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl SwaggerDocument {
  /// Reads and validates a single Swagger 2.0 JSON document.
  pub fn load(path: &Path) -> Result<Self, GeneratorError> {
    if !path.is_file() {
      return Err(GeneratorError::FileNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    let document: Self = serde_json::from_str(&text).map_err(|e| GeneratorError::SchemaParse {
      file: path.display().to_string(),
      message: e.to_string(),
    })?;
    document.validate()?;
    Ok(document)
  }

  /// Checks the mandatory header fields, producing one specific message per
  /// missing or unsupported field.
  pub fn validate(&self) -> Result<(), GeneratorError> {
    let Some(ref swagger) = self.swagger else {
      return Err(GeneratorError::InvalidSwaggerDocument(
        "the 'swagger' version field is missing".to_string(),
      ));
    };
    if !swagger.starts_with("2.") {
      return Err(GeneratorError::InvalidSwaggerDocument(format!(
        "unsupported swagger version '{swagger}', expected 2.x"
      )));
    }
    let Some(ref info) = self.info else {
      return Err(GeneratorError::InvalidSwaggerDocument(
        "the 'info' block is missing".to_string(),
      ));
    };
    if info.title.is_empty() {
      return Err(GeneratorError::InvalidSwaggerDocument(
        "'info.title' is required".to_string(),
      ));
    }
    if info.version.is_empty() {
      return Err(GeneratorError::InvalidSwaggerDocument(
        "'info.version' is required".to_string(),
      ));
    }
    Ok(())
  }
}

/// The `additionalProperties` keyword is a boolean-or-schema union; the three
/// cases carry different meaning and must not be collapsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AdditionalPropertiesRepr", into = "AdditionalPropertiesRepr")]
pub enum AdditionalProperties {
  /// `additionalProperties: false` — no extra properties allowed.
  NoExtra,
  /// `additionalProperties: true` — unconstrained extra properties.
  AnyExtra,
  /// An object schema constraining the values of extra properties.
  Constrained(Box<Schema>),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum AdditionalPropertiesRepr {
  Flag(bool),
  Schema(Box<Schema>),
}

impl From<AdditionalPropertiesRepr> for AdditionalProperties {
  fn from(repr: AdditionalPropertiesRepr) -> Self {
    match repr {
      AdditionalPropertiesRepr::Flag(false) => Self::NoExtra,
      AdditionalPropertiesRepr::Flag(true) => Self::AnyExtra,
      AdditionalPropertiesRepr::Schema(schema) => Self::Constrained(schema),
    }
  }
}

impl From<AdditionalProperties> for AdditionalPropertiesRepr {
  fn from(value: AdditionalProperties) -> Self {
    match value {
      AdditionalProperties::NoExtra => Self::Flag(false),
      AdditionalProperties::AnyExtra => Self::Flag(true),
      AdditionalProperties::Constrained(schema) => Self::Schema(schema),
    }
  }
}

/// A single JSON Schema node as found in a Swagger 2.0 `definitions` map.
///
/// Property order is preserved through `IndexMap` so that generated output is
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schema {
  #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
  pub ref_path: Option<String>,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub schema_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub properties: IndexMap<String, Schema>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub required: Vec<String>,
  #[serde(rename = "allOf", skip_serializing_if = "Vec::is_empty")]
  pub all_of: Vec<Schema>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub items: Option<Box<Schema>>,
  #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
  pub enum_values: Vec<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub min_length: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_length: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pattern: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub minimum: Option<Number>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub maximum: Option<Number>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub min_items: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_items: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub unique_items: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub multiple_of: Option<Number>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub min_properties: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_properties: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub additional_properties: Option<AdditionalProperties>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub example: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub read_only: Option<bool>,
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub definitions: IndexMap<String, Schema>,
}

impl Schema {
  /// Returns the `$ref` target if one is present and non-empty.
  pub fn reference(&self) -> Option<&str> {
    self.ref_path.as_deref().filter(|r| !r.is_empty())
  }

  /// Compares two schemas for semantic equality: shape and constraints match,
  /// `required` and `enum` are order-independent, and descriptions are ignored.
  ///
  /// `additionalProperties`, `readOnly`, `title` and `example` are not part of
  /// the comparison either; two definitions differing only in those fields are
  /// treated as identical duplicates.
  pub fn equivalent(&self, other: &Self) -> bool {
    if self.schema_type != other.schema_type
      || self.format != other.format
      || self.ref_path != other.ref_path
      || self.min_length != other.min_length
      || self.max_length != other.max_length
      || self.pattern != other.pattern
      || self.minimum != other.minimum
      || self.maximum != other.maximum
      || self.min_items != other.min_items
      || self.max_items != other.max_items
      || self.unique_items != other.unique_items
      || self.multiple_of != other.multiple_of
    {
      return false;
    }

    if !unordered_string_eq(&self.required, &other.required) {
      return false;
    }
    if !unordered_value_eq(&self.enum_values, &other.enum_values) {
      return false;
    }

    if self.properties.len() != other.properties.len() {
      return false;
    }
    for (name, schema) in &self.properties {
      match other.properties.get(name) {
        Some(other_schema) if schema.equivalent(other_schema) => {}
        _ => return false,
      }
    }

    match (&self.items, &other.items) {
      (None, None) => {}
      (Some(a), Some(b)) if a.equivalent(b) => {}
      _ => return false,
    }

    self.all_of.len() == other.all_of.len()
      && self.all_of.iter().zip(&other.all_of).all(|(a, b)| a.equivalent(b))
  }
}

fn unordered_string_eq(a: &[String], b: &[String]) -> bool {
  if a.len() != b.len() {
    return false;
  }
  let mut left: Vec<&String> = a.iter().collect();
  let mut right: Vec<&String> = b.iter().collect();
  left.sort();
  right.sort();
  left == right
}

fn unordered_value_eq(a: &[Value], b: &[Value]) -> bool {
  if a.len() != b.len() {
    return false;
  }
  let mut left: Vec<String> = a.iter().map(ToString::to_string).collect();
  let mut right: Vec<String> = b.iter().map(ToString::to_string).collect();
  left.sort();
  right.sort();
  left == right
}

/// Extracts the definition name from a `$ref` string.
///
/// Accepts the canonical `#/definitions/Name` form; for any other pointer the
/// final path segment is used.
pub fn ref_name(ref_path: &str) -> Option<&str> {
  if let Some(name) = ref_path.strip_prefix(DEFINITIONS_REF_PREFIX) {
    return (!name.is_empty()).then_some(name);
  }
  ref_path.rsplit('/').next().filter(|name| !name.is_empty())
}
