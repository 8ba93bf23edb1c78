use serde_json::{Number, json};

use crate::generator::{
  model::{PropertyModel, RuleKind},
  validation_rules::ValidationRuleBuilder,
};

fn property(json_name: &str) -> PropertyModel {
  PropertyModel {
    name: json_name.to_string(),
    json_name: json_name.to_string(),
    type_name: "string".to_string(),
    ..PropertyModel::default()
  }
}

#[test]
fn rules_are_emitted_in_a_fixed_order() {
  let model = PropertyModel {
    is_required: true,
    min_length: Some(1),
    max_length: Some(64),
    pattern: Some("^[a-z]+$".to_string()),
    minimum: Some(Number::from(0)),
    maximum: Some(Number::from(100)),
    min_items: Some(1),
    max_items: Some(5),
    unique_items: Some(true),
    multiple_of: Some(Number::from(2)),
    ..property("payload")
  };

  let rules = ValidationRuleBuilder::new(true).build(&model, &[json!("a"), json!("b")], None);
  let kinds: Vec<RuleKind> = rules.iter().map(|rule| rule.kind).collect();
  assert_eq!(
    kinds,
    vec![
      RuleKind::NotEmpty,
      RuleKind::MinLength,
      RuleKind::MaxLength,
      RuleKind::Pattern,
      RuleKind::MinValue,
      RuleKind::MaxValue,
      RuleKind::MinItems,
      RuleKind::MaxItems,
      RuleKind::UniqueItems,
      RuleKind::MultipleOf,
      RuleKind::EnumMembership,
    ]
  );
}

#[test]
fn absent_constraints_emit_no_rules() {
  let rules = ValidationRuleBuilder::new(true).build(&property("name"), &[], None);
  assert!(rules.is_empty());
}

#[test]
fn required_properties_get_a_not_empty_rule() {
  let model = PropertyModel {
    is_required: true,
    ..property("name")
  };
  let rules = ValidationRuleBuilder::new(true).build(&model, &[], None);
  assert_eq!(rules.len(), 1);
  assert_eq!(rules[0].kind, RuleKind::NotEmpty);
  assert!(rules[0].parameters.is_empty());
  assert_eq!(rules[0].message, "'name' must not be empty.");
}

#[test]
fn length_and_range_messages_carry_the_constraint_values() {
  let model = PropertyModel {
    min_length: Some(2),
    maximum: Some(Number::from(10)),
    ..property("code")
  };
  let rules = ValidationRuleBuilder::new(true).build(&model, &[], None);
  assert_eq!(rules[0].parameters, vec!["2"]);
  assert_eq!(rules[0].message, "'code' must be at least 2 characters long.");
  assert_eq!(rules[1].parameters, vec!["10"]);
  assert_eq!(rules[1].message, "'code' must be less than or equal to 10.");
}

#[test]
fn an_empty_pattern_is_skipped() {
  let model = PropertyModel {
    pattern: Some(String::new()),
    ..property("code")
  };
  let rules = ValidationRuleBuilder::new(true).build(&model, &[], None);
  assert!(rules.is_empty());
}

#[test]
fn legacy_mode_keeps_the_original_array_phrasing() {
  let model = PropertyModel {
    min_items: Some(1),
    max_items: Some(3),
    unique_items: Some(true),
    ..property("tags")
  };
  let rules = ValidationRuleBuilder::new(true).build(&model, &[], None);

  assert_eq!(rules[0].parameters, vec!["1"]);
  assert_eq!(rules[0].message, "'tags' must contain at least 1 item(s).");
  assert_eq!(rules[1].parameters, vec!["3"]);
  assert_eq!(rules[1].message, "'tags' must contain at most 3 item(s).");
  assert!(rules[2].parameters.is_empty());
  assert_eq!(rules[2].message, "'tags' must contain unique items.");
}

#[test]
fn configured_runs_add_a_null_guard_to_array_rules() {
  let model = PropertyModel {
    min_items: Some(1),
    max_items: Some(3),
    unique_items: Some(true),
    ..property("tags")
  };
  let rules = ValidationRuleBuilder::new(false).build(&model, &[], None);

  assert_eq!(rules[0].parameters, vec!["1", "allow_null"]);
  assert_eq!(rules[0].message, "'tags', when present, must contain at least 1 item(s).");
  assert_eq!(rules[1].parameters, vec!["3", "allow_null"]);
  assert_eq!(rules[1].message, "'tags', when present, must contain at most 3 item(s).");
  assert_eq!(rules[2].parameters, vec!["allow_null"]);
  assert_eq!(rules[2].message, "'tags', when present, must contain unique items.");
}

#[test]
fn unique_items_false_emits_no_rule() {
  let model = PropertyModel {
    unique_items: Some(false),
    ..property("tags")
  };
  assert!(ValidationRuleBuilder::new(true).build(&model, &[], None).is_empty());
}

#[test]
fn enum_membership_uses_the_generated_enum_type_when_present() {
  let model = PropertyModel {
    enum_type_name: Some("OrderStatus".to_string()),
    ..property("status")
  };
  let rules = ValidationRuleBuilder::new(false).build(&model, &[json!(1), json!(2)], None);
  assert_eq!(rules.len(), 1);
  assert_eq!(rules[0].kind, RuleKind::EnumMembership);
  assert_eq!(rules[0].parameters, vec!["OrderStatus"]);
  assert_eq!(rules[0].message, "'status' must be one of the defined OrderStatus values.");
}

#[test]
fn enum_membership_quotes_literals_for_constants_classes() {
  let model = PropertyModel {
    constants_class_name: Some("OrderStatusConstants".to_string()),
    ..property("status")
  };
  let rules = ValidationRuleBuilder::new(false).build(&model, &[json!("placed"), json!("shipped")], None);
  assert_eq!(rules[0].parameters, vec!["\"placed\"", "\"shipped\""]);
  assert_eq!(rules[0].message, "'status' must be one of: \"placed\", \"shipped\".");
}

#[test]
fn enum_membership_falls_back_to_stringified_literals() {
  let model = property("status");
  let rules = ValidationRuleBuilder::new(false).build(&model, &[json!("placed"), json!(2)], None);
  assert_eq!(rules[0].parameters, vec!["placed", "2"]);
  assert_eq!(rules[0].message, "'status' must be one of: placed, 2.");
}

#[test]
fn a_custom_message_overrides_every_emitted_rule() {
  let model = PropertyModel {
    is_required: true,
    min_length: Some(3),
    ..property("name")
  };
  let rules = ValidationRuleBuilder::new(false).build(&model, &[], Some("Name is invalid."));
  assert_eq!(rules.len(), 2);
  assert!(rules.iter().all(|rule| rule.message == "Name is invalid."));
}
