use serde_json::Value;

use crate::generator::model::{PropertyModel, RuleKind, ValidationRule};

const NULL_GUARD_PARAMETER: &str = "allow_null";

/// Derives the ordered validation rule list for a property from its effective
/// (post-override) constraints.
///
/// `legacy_mode` is true only when no modifier configuration exists anywhere
/// in the run. The array-cardinality rules (MinItems/MaxItems/UniqueItems)
/// then keep their original phrasing without a null guard; with a
/// configuration present they carry an explicit null-guard parameter and a
/// "when present" message. Both branches are intentional and must stay
/// distinct.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRuleBuilder {
  legacy_mode: bool,
}

impl ValidationRuleBuilder {
  pub fn new(legacy_mode: bool) -> Self {
    Self { legacy_mode }
  }

  /// Emits rules in a fixed order: NotEmpty, MinLength, MaxLength, Pattern,
  /// MinValue, MaxValue, MinItems, MaxItems, UniqueItems, MultipleOf,
  /// EnumMembership.
  pub fn build(
    &self,
    property: &PropertyModel,
    enum_values: &[Value],
    custom_message: Option<&str>,
  ) -> Vec<ValidationRule> {
    let mut rules = Vec::new();
    let name = &property.json_name;

    if property.is_required {
      rules.push(Self::rule(
        RuleKind::NotEmpty,
        vec![],
        format!("'{name}' must not be empty."),
        custom_message,
      ));
    }

    if let Some(min_length) = property.min_length {
      rules.push(Self::rule(
        RuleKind::MinLength,
        vec![min_length.to_string()],
        format!("'{name}' must be at least {min_length} characters long."),
        custom_message,
      ));
    }

    if let Some(max_length) = property.max_length {
      rules.push(Self::rule(
        RuleKind::MaxLength,
        vec![max_length.to_string()],
        format!("'{name}' must be at most {max_length} characters long."),
        custom_message,
      ));
    }

    if let Some(pattern) = property.pattern.as_deref().filter(|p| !p.is_empty()) {
      rules.push(Self::rule(
        RuleKind::Pattern,
        vec![pattern.to_string()],
        format!("'{name}' must match the pattern '{pattern}'."),
        custom_message,
      ));
    }

    if let Some(ref minimum) = property.minimum {
      rules.push(Self::rule(
        RuleKind::MinValue,
        vec![minimum.to_string()],
        format!("'{name}' must be greater than or equal to {minimum}."),
        custom_message,
      ));
    }

    if let Some(ref maximum) = property.maximum {
      rules.push(Self::rule(
        RuleKind::MaxValue,
        vec![maximum.to_string()],
        format!("'{name}' must be less than or equal to {maximum}."),
        custom_message,
      ));
    }

    if let Some(min_items) = property.min_items {
      rules.push(self.item_count_rule(
        RuleKind::MinItems,
        min_items,
        format!("'{name}' must contain at least {min_items} item(s)."),
        format!("'{name}', when present, must contain at least {min_items} item(s)."),
        custom_message,
      ));
    }

    if let Some(max_items) = property.max_items {
      rules.push(self.item_count_rule(
        RuleKind::MaxItems,
        max_items,
        format!("'{name}' must contain at most {max_items} item(s)."),
        format!("'{name}', when present, must contain at most {max_items} item(s)."),
        custom_message,
      ));
    }

    if property.unique_items == Some(true) {
      let (parameters, message) = if self.legacy_mode {
        (vec![], format!("'{name}' must contain unique items."))
      } else {
        (
          vec![NULL_GUARD_PARAMETER.to_string()],
          format!("'{name}', when present, must contain unique items."),
        )
      };
      rules.push(Self::rule(RuleKind::UniqueItems, parameters, message, custom_message));
    }

    if let Some(ref multiple_of) = property.multiple_of {
      rules.push(Self::rule(
        RuleKind::MultipleOf,
        vec![multiple_of.to_string()],
        format!("'{name}' must be a multiple of {multiple_of}."),
        custom_message,
      ));
    }

    if !enum_values.is_empty() {
      rules.push(Self::enum_membership_rule(property, enum_values, custom_message));
    }

    rules
  }

  fn item_count_rule(
    &self,
    kind: RuleKind,
    count: u64,
    legacy_message: String,
    guarded_message: String,
    custom_message: Option<&str>,
  ) -> ValidationRule {
    if self.legacy_mode {
      Self::rule(kind, vec![count.to_string()], legacy_message, custom_message)
    } else {
      Self::rule(
        kind,
        vec![count.to_string(), NULL_GUARD_PARAMETER.to_string()],
        guarded_message,
        custom_message,
      )
    }
  }

  /// Three distinct membership shapes: a generated enum type, a constants
  /// class with string-literal membership, or a stringified fallback when
  /// neither was registered for the property.
  fn enum_membership_rule(
    property: &PropertyModel,
    enum_values: &[Value],
    custom_message: Option<&str>,
  ) -> ValidationRule {
    let name = &property.json_name;

    if let Some(ref enum_type) = property.enum_type_name {
      return Self::rule(
        RuleKind::EnumMembership,
        vec![enum_type.clone()],
        format!("'{name}' must be one of the defined {enum_type} values."),
        custom_message,
      );
    }

    if property.constants_class_name.is_some() {
      let literals: Vec<String> = enum_values
        .iter()
        .map(|value| match value {
          Value::String(text) => format!("\"{text}\""),
          other => other.to_string(),
        })
        .collect();
      let listing = literals.join(", ");
      return Self::rule(
        RuleKind::EnumMembership,
        literals,
        format!("'{name}' must be one of: {listing}."),
        custom_message,
      );
    }

    let literals: Vec<String> = enum_values
      .iter()
      .map(|value| match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
      })
      .collect();
    let listing = literals.join(", ");
    Self::rule(
      RuleKind::EnumMembership,
      literals,
      format!("'{name}' must be one of: {listing}."),
      custom_message,
    )
  }

  fn rule(
    kind: RuleKind,
    parameters: Vec<String>,
    default_message: String,
    custom_message: Option<&str>,
  ) -> ValidationRule {
    ValidationRule {
      kind,
      parameters,
      message: custom_message.map_or(default_message, ToString::to_string),
    }
  }
}
