use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::generator::errors::GeneratorError;

fn default_true() -> bool {
  true
}

fn is_true(value: &bool) -> bool {
  *value
}

fn default_max_depth() -> usize {
  10
}

fn is_default_max_depth(value: &usize) -> bool {
  *value == default_max_depth()
}

/// Declarative override document controlling inclusion, type, description and
/// validation per property path.
///
/// Rule keys are dot-joined property paths whose first segment is a root
/// definition name, e.g. `Order.details.product`. Paths containing `*` are
/// accepted but exempt from existence validation; no wildcard matching is
/// applied anywhere else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModifierConfiguration {
  pub global: GlobalSettings,
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub rules: IndexMap<String, PropertyRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalSettings {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub namespace: Option<String>,
  #[serde(skip_serializing_if = "is_true")]
  pub generate_enum_types: bool,
  #[serde(skip_serializing_if = "is_true")]
  pub default_include: bool,
  #[serde(skip_serializing_if = "is_true")]
  pub include_descriptions: bool,
  #[serde(skip_serializing_if = "is_default_max_depth")]
  pub max_depth: usize,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_name_prefix: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_name_suffix: Option<String>,
}

impl Default for GlobalSettings {
  fn default() -> Self {
    Self {
      namespace: None,
      generate_enum_types: true,
      default_include: true,
      include_descriptions: true,
      max_depth: default_max_depth(),
      type_name_prefix: None,
      type_name_suffix: None,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyRule {
  /// Inclusion defaults to true when absent; the global `defaultInclude`
  /// applies to paths with no rule at all.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub include: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  /// Overrides the target type verbatim and bypasses base type mapping and
  /// enum detection for the property.
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub type_override: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub validation: Option<PropertyValidation>,
}

/// Per-property validation overrides; absent fields fall back to the
/// schema-derived constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyValidation {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub required: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub min_length: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_length: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pattern: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub minimum: Option<serde_json::Number>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub maximum: Option<serde_json::Number>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl ModifierConfiguration {
  /// Loads a configuration from a YAML or JSON file, auto-detected by
  /// extension.
  pub fn load(path: &Path) -> Result<Self, GeneratorError> {
    if !path.is_file() {
      return Err(GeneratorError::FileNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    let extension = path
      .extension()
      .and_then(|e| e.to_str())
      .unwrap_or_default()
      .to_ascii_lowercase();

    let parsed = match extension.as_str() {
      "yml" | "yaml" => Self::from_yaml(&text),
      "json" => Self::from_json(&text),
      other => return Err(GeneratorError::UnsupportedConfigurationFormat(other.to_string())),
    };

    parsed.map_err(|e| GeneratorError::ConfigurationParse {
      file: path.display().to_string(),
      message: e.to_string(),
    })
  }

  pub fn from_yaml(text: &str) -> Result<Self, GeneratorError> {
    serde_yaml_ng::from_str(text).map_err(|e| GeneratorError::ConfigurationParse {
      file: String::new(),
      message: e.to_string(),
    })
  }

  pub fn from_json(text: &str) -> Result<Self, GeneratorError> {
    serde_json::from_str(text).map_err(|e| GeneratorError::ConfigurationParse {
      file: String::new(),
      message: e.to_string(),
    })
  }

  pub fn to_yaml(&self) -> Result<String, GeneratorError> {
    serde_yaml_ng::to_string(self).map_err(|e| GeneratorError::ConfigurationParse {
      file: String::new(),
      message: e.to_string(),
    })
  }

  pub fn to_json(&self) -> Result<String, GeneratorError> {
    serde_json::to_string_pretty(self).map_err(|e| GeneratorError::ConfigurationParse {
      file: String::new(),
      message: e.to_string(),
    })
  }

  /// Returns the rule's `include` flag for an exact path, falling back to the
  /// global default. Inclusion is opt-out.
  pub fn is_included(&self, path: &str) -> bool {
    match self.rules.get(path).and_then(|rule| rule.include) {
      Some(include) => include,
      None => self.global.default_include,
    }
  }

  /// Exact rule lookup; no normalization or wildcard expansion.
  pub fn rule(&self, path: &str) -> Option<&PropertyRule> {
    self.rules.get(path)
  }

  /// All rules keyed under `parent_path.`, in declaration order.
  pub fn child_rules<'a>(&'a self, parent_path: &'a str) -> impl Iterator<Item = (&'a str, &'a PropertyRule)> {
    self
      .rules
      .iter()
      .filter(move |(path, _)| {
        path
          .strip_prefix(parent_path)
          .is_some_and(|rest| rest.starts_with('.'))
      })
      .map(|(path, rule)| (path.as_str(), rule))
  }
}
