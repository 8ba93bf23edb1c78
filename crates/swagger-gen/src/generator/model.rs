use serde::Serialize;
use serde_json::{Number, Value};
use strum::Display;

/// Renderer-agnostic representation of one generated class. Built fresh per
/// generation run and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassModel {
  pub class_name: String,
  /// Validator class names stay bound to the original unformatted definition
  /// name; the prefix/suffix formatting only reaches the DTO name they wrap.
  pub validator_class_name: String,
  pub namespace: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub properties: Vec<PropertyModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyModel {
  /// Formatted (PascalCase) member name.
  pub name: String,
  /// The original schema key, preserved for wire (de)serialization.
  pub json_name: String,
  /// Target semantic type, possibly carrying the nullable marker.
  #[serde(rename = "type")]
  pub type_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub is_required: bool,
  pub is_nullable: bool,
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
  pub enum_type_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub constants_class_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default_value: Option<String>,
  pub validation_rules: Vec<ValidationRule>,
}

/// One semantic validation rule derived from the effective constraints of a
/// property. Emission order is deterministic; see `ValidationRuleBuilder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
  pub kind: RuleKind,
  pub parameters: Vec<String>,
  pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum RuleKind {
  NotEmpty,
  MinLength,
  MaxLength,
  Pattern,
  MinValue,
  MaxValue,
  MinItems,
  MaxItems,
  UniqueItems,
  MultipleOf,
  EnumMembership,
}

/// Metadata for a generated integer enum type, keyed and deduplicated by its
/// computed `{SchemaName}{PropertyName}` name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumInfo {
  pub name: String,
  pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMember {
  pub name: String,
  pub value: Value,
}

/// Metadata for a generated string-constants class, deduplicated the same way
/// as [`EnumInfo`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantsInfo {
  pub name: String,
  pub constants: Vec<ConstantMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantMember {
  pub name: String,
  pub value: String,
}
