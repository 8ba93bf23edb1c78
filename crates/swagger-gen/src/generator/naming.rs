use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use serde_json::Value;

use crate::generator::{
  modifier::ModifierConfiguration,
  schema::{Schema, ref_name},
};

static INVALID_IDENT_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\- ]+").unwrap());

/// Applies the configured type name prefix and suffix to every generated type
/// name. Validator class names are the one exception: they stay bound to the
/// original unformatted definition name.
#[derive(Debug, Clone, Default)]
pub struct TypeNameFormatter {
  prefix: String,
  suffix: String,
}

impl TypeNameFormatter {
  pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
    Self {
      prefix: prefix.into(),
      suffix: suffix.into(),
    }
  }

  pub fn from_config(config: Option<&ModifierConfiguration>) -> Self {
    match config {
      Some(config) => Self::new(
        config.global.type_name_prefix.clone().unwrap_or_default(),
        config.global.type_name_suffix.clone().unwrap_or_default(),
      ),
      None => Self::default(),
    }
  }

  pub fn format(&self, name: &str) -> String {
    format!("{}{}{}", self.prefix, name, self.suffix)
  }
}

/// Converts an input into PascalCase.
///
/// Inputs that already start with an uppercase letter are returned unchanged,
/// preserving existing PascalCase names like `NewPet`. Otherwise the input is
/// split on underscores, hyphens and spaces; single words get their first
/// letter capitalized, multi-word inputs capitalize each word and lowercase
/// the remainder.
pub fn to_pascal_case(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }
  if input.chars().next().is_some_and(char::is_uppercase) {
    return input.to_string();
  }

  let words: Vec<&str> = input
    .split(['_', '-', ' '])
    .filter(|word| !word.is_empty())
    .collect();

  match words.as_slice() {
    [] => String::new(),
    [word] => capitalize_first(word),
    words => words.iter().map(|word| capitalize_word(word)).join(""),
  }
}

fn capitalize_first(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

fn capitalize_word(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first
      .to_uppercase()
      .chain(chars.flat_map(char::to_lowercase))
      .collect(),
    None => String::new(),
  }
}

/// Derives an enum member name from an enum literal: PascalCase with invalid
/// characters stripped, a `Value` prefix when the literal starts with a digit,
/// and `Unknown` when nothing identifier-like remains.
pub fn enum_member_name(value: &Value) -> String {
  let literal = literal_text(value);
  let sanitized = INVALID_IDENT_CHARS_RE.replace_all(&literal, "");
  let name = to_pascal_case(sanitized.trim());

  if name.is_empty() {
    return "Unknown".to_string();
  }
  if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
    return format!("Value{name}");
  }
  name
}

/// Derives a constant name from a string enum literal: uppercased, hyphens and
/// spaces turned into underscores, a `VALUE_` prefix when the literal starts
/// with a digit, and `UNKNOWN` when nothing remains.
pub fn constant_name(value: &Value) -> String {
  let literal = literal_text(value);
  let sanitized = INVALID_IDENT_CHARS_RE.replace_all(&literal, "");
  let name = sanitized.trim().to_uppercase().replace(['-', ' '], "_");

  if name.is_empty() {
    return "UNKNOWN".to_string();
  }
  if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
    return format!("VALUE_{name}");
  }
  name
}

fn literal_text(value: &Value) -> String {
  match value {
    Value::String(text) => text.clone(),
    other => other.to_string(),
  }
}

/// A base type resolved from a schema's `type`/`format` pair. Only value-like
/// types and referenced classes accept the nullable marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
  pub name: String,
  pub accepts_nullable_marker: bool,
}

impl MappedType {
  fn value_type(name: &str) -> Self {
    Self {
      name: name.to_string(),
      accepts_nullable_marker: true,
    }
  }

  fn reference_type(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      accepts_nullable_marker: false,
    }
  }
}

/// Maps a schema `type`/`format` pair to its target semantic type.
///
/// A non-empty `$ref` short-circuits to the referenced definition's formatted
/// type name, so prefix/suffix settings stay consistent between the defining
/// class and every property that references it.
pub fn base_type(schema: &Schema, formatter: &TypeNameFormatter) -> MappedType {
  if let Some(reference) = schema.reference() {
    let name = ref_name(reference).unwrap_or(reference);
    return MappedType {
      name: formatter.format(&to_pascal_case(name)),
      accepts_nullable_marker: true,
    };
  }

  match schema.schema_type.as_deref() {
    Some("integer") => {
      if schema.format.as_deref() == Some("int64") {
        MappedType::value_type("long")
      } else {
        MappedType::value_type("int")
      }
    }
    Some("number") => {
      if schema.format.as_deref() == Some("float") {
        MappedType::value_type("float")
      } else {
        MappedType::value_type("decimal")
      }
    }
    Some("string") => {
      if schema.format.as_deref() == Some("date-time") {
        MappedType::value_type("DateTime")
      } else {
        MappedType::reference_type("string")
      }
    }
    Some("boolean") => MappedType::value_type("bool"),
    Some("array") => {
      let item_type = schema
        .items
        .as_ref()
        .map_or_else(|| "object".to_string(), |items| base_type(items, formatter).name);
      MappedType::reference_type(format!("List<{item_type}>"))
    }
    _ => MappedType::reference_type("object"),
  }
}
