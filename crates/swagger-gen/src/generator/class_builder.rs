use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde_json::Value;

use crate::generator::{
  metrics::{GenerationStats, GenerationWarning},
  model::{ClassModel, ConstantMember, ConstantsInfo, EnumInfo, EnumMember, PropertyModel},
  modifier::{ModifierConfiguration, PropertyRule},
  naming::{MappedType, TypeNameFormatter, base_type, constant_name, enum_member_name, to_pascal_case},
  schema::{Schema, ref_name},
  validation_rules::ValidationRuleBuilder,
};

/// Run-level knobs that are not part of the modifier configuration.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
  /// Namespace stamped on every class model; `global.namespace` in the
  /// configuration overrides it.
  pub namespace: String,
  /// When set, non-required properties become nullable and value-like types
  /// carry the `?` marker.
  pub nullable: bool,
}

impl Default for GeneratorOptions {
  fn default() -> Self {
    Self {
      namespace: "Generated".to_string(),
      nullable: false,
    }
  }
}

/// One property candidate discovered while enumerating a schema, either
/// directly or through an `allOf` branch.
struct PropertyCandidate<'a> {
  key: &'a str,
  schema: &'a Schema,
  required: bool,
  /// PascalCase base name of the schema that defines the property; inherited
  /// properties keep the referenced definition as owner so enum lookups hit
  /// the names registered during the sweep.
  owner_base: String,
}

/// Walks named schema definitions and produces [`ClassModel`]s, applying
/// modifier configuration rules per property path.
///
/// The enum/constants sweep must run before any class is built; the maps are
/// read-only during the build phase.
pub struct ClassModelBuilder<'a> {
  definitions: &'a IndexMap<String, Schema>,
  config: Option<&'a ModifierConfiguration>,
  options: &'a GeneratorOptions,
  formatter: TypeNameFormatter,
  rule_builder: ValidationRuleBuilder,
  namespace: String,
  max_depth: usize,
  generate_enum_types: bool,
  include_descriptions: bool,
  enums: BTreeMap<String, EnumInfo>,
  constants: BTreeMap<String, ConstantsInfo>,
}

impl<'a> ClassModelBuilder<'a> {
  pub fn new(
    definitions: &'a IndexMap<String, Schema>,
    config: Option<&'a ModifierConfiguration>,
    options: &'a GeneratorOptions,
  ) -> Self {
    let namespace = config
      .and_then(|c| c.global.namespace.clone())
      .unwrap_or_else(|| options.namespace.clone());

    Self {
      definitions,
      config,
      options,
      formatter: TypeNameFormatter::from_config(config),
      rule_builder: ValidationRuleBuilder::new(config.is_none()),
      namespace,
      max_depth: config.map_or(10, |c| c.global.max_depth),
      generate_enum_types: config.is_none_or(|c| c.global.generate_enum_types),
      include_descriptions: config.is_none_or(|c| c.global.include_descriptions),
      enums: BTreeMap::new(),
      constants: BTreeMap::new(),
    }
  }

  pub fn enums(&self) -> &BTreeMap<String, EnumInfo> {
    &self.enums
  }

  pub fn constants(&self) -> &BTreeMap<String, ConstantsInfo> {
    &self.constants
  }

  /// Sweeps the whole definitions map and registers enum/constants metadata,
  /// so property type resolution during the build phase can reference the
  /// computed names. Identical computed names collapse to one entry.
  pub fn collect_enum_types(&mut self, stats: &mut GenerationStats) {
    if !self.generate_enum_types {
      return;
    }

    let mut registrations = Vec::new();
    for (name, schema) in self.definitions {
      Self::sweep_schema(&to_pascal_case(name), schema, 0, self.max_depth, &mut registrations);
    }

    for (owner_base, key, schema) in registrations {
      self.register_enum_property(&owner_base, key, schema, stats);
    }
  }

  fn sweep_schema<'s>(
    owner_base: &str,
    schema: &'s Schema,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<(String, &'s str, &'s Schema)>,
  ) {
    if depth > max_depth {
      return;
    }

    for branch in &schema.all_of {
      // Ref branches are swept under their own definition name.
      if branch.reference().is_none() {
        Self::sweep_schema(owner_base, branch, depth, max_depth, out);
      }
    }

    for (key, property) in &schema.properties {
      if !property.enum_values.is_empty() {
        out.push((owner_base.to_string(), key.as_str(), property));
      }
      if Self::is_inline_object(property) {
        let nested_base = format!("{owner_base}{}", to_pascal_case(key));
        Self::sweep_schema(&nested_base, property, depth + 1, max_depth, out);
      }
    }
  }

  fn register_enum_property(&mut self, owner_base: &str, key: &str, schema: &Schema, stats: &mut GenerationStats) {
    let base = format!("{owner_base}{}", to_pascal_case(key));

    match schema.schema_type.as_deref() {
      Some("integer") => {
        let name = self.formatter.format(&base);
        self.enums.entry(name.clone()).or_insert_with(|| {
          stats.record_enum_type();
          EnumInfo {
            name,
            members: schema
              .enum_values
              .iter()
              .map(|value| EnumMember {
                name: enum_member_name(value),
                value: value.clone(),
              })
              .collect(),
          }
        });
      }
      Some("string") => {
        let name = self.formatter.format(&format!("{base}Constants"));
        self.constants.entry(name.clone()).or_insert_with(|| {
          stats.record_constants_class();
          ConstantsInfo {
            name,
            constants: schema
              .enum_values
              .iter()
              .map(|value| ConstantMember {
                name: constant_name(value),
                value: match value {
                  Value::String(text) => text.clone(),
                  other => other.to_string(),
                },
              })
              .collect(),
          }
        });
      }
      _ => {}
    }
  }

  /// Builds the class model for one named definition, plus one model per
  /// nested inline object property. The main class comes first; nested
  /// classes follow in property order.
  pub fn build_classes(&self, name: &str, schema: &Schema, stats: &mut GenerationStats) -> Vec<ClassModel> {
    self.build_class_inner(&to_pascal_case(name), name, schema, 0, stats)
  }

  fn build_class_inner(
    &self,
    owner_base: &str,
    path: &str,
    schema: &Schema,
    depth: usize,
    stats: &mut GenerationStats,
  ) -> Vec<ClassModel> {
    let mut properties = Vec::new();
    let mut nested_classes = Vec::new();

    for candidate in self.enumerate_properties(owner_base, schema, stats) {
      let property_path = format!("{path}.{}", candidate.key);
      if self.config.is_some_and(|c| !c.is_included(&property_path)) {
        stats.record_excluded_property();
        continue;
      }

      let rule = self.config.and_then(|c| c.rule(&property_path));

      let mapped_override = if rule.and_then(|r| r.type_override.as_ref()).is_none()
        && Self::is_inline_object(candidate.schema)
      {
        let nested_base = format!("{}{}", candidate.owner_base, to_pascal_case(candidate.key));
        if candidate.owner_base != owner_base {
          // Inherited through a ref branch; the referenced definition's own
          // build emits the nested class.
          Some(MappedType {
            name: self.formatter.format(&nested_base),
            accepts_nullable_marker: true,
          })
        } else if depth + 1 > self.max_depth {
          stats.record_warning(GenerationWarning::MaxDepthExceeded {
            path: property_path.clone(),
            limit: self.max_depth,
          });
          Some(MappedType {
            name: "object".to_string(),
            accepts_nullable_marker: false,
          })
        } else {
          let mut nested =
            self.build_class_inner(&nested_base, &property_path, candidate.schema, depth + 1, stats);
          nested_classes.append(&mut nested);
          Some(MappedType {
            name: self.formatter.format(&nested_base),
            accepts_nullable_marker: true,
          })
        }
      } else {
        None
      };

      let property = self.map_property(&candidate, rule, mapped_override);
      stats.record_property();
      properties.push(property);
    }

    let description = self.class_description(path, schema);
    let class = ClassModel {
      class_name: self.formatter.format(owner_base),
      validator_class_name: format!("{owner_base}Validator"),
      namespace: self.namespace.clone(),
      description,
      properties,
    };

    let mut classes = vec![class];
    classes.append(&mut nested_classes);
    classes
  }

  fn class_description(&self, path: &str, schema: &Schema) -> Option<String> {
    if !self.include_descriptions {
      return None;
    }
    self
      .config
      .and_then(|c| c.rule(path))
      .and_then(|rule| rule.description.clone())
      .filter(|text| !text.is_empty())
      .or_else(|| schema.description.clone())
  }

  /// Enumerates properties from either the `allOf` composition or the schema's
  /// own property map. All branches contribute to one flat list; whether a
  /// ref branch renders as a base class is the renderer's decision, not the
  /// model's.
  fn enumerate_properties<'s>(
    &'s self,
    owner_base: &str,
    schema: &'s Schema,
    stats: &mut GenerationStats,
  ) -> Vec<PropertyCandidate<'s>> {
    let mut candidates = Vec::new();

    if schema.all_of.is_empty() {
      for (key, property) in &schema.properties {
        candidates.push(PropertyCandidate {
          key,
          schema: property,
          required: schema.required.iter().any(|r| r == key),
          owner_base: owner_base.to_string(),
        });
      }
      return candidates;
    }

    for branch in &schema.all_of {
      if let Some(reference) = branch.reference() {
        let resolved = ref_name(reference).and_then(|name| self.definitions.get(name).map(|s| (name, s)));
        let Some((referenced_name, referenced)) = resolved else {
          stats.record_warning(GenerationWarning::UnresolvedAllOfReference {
            definition: owner_base.to_string(),
            reference: reference.to_string(),
          });
          continue;
        };

        for (key, property) in &referenced.properties {
          // Required-union invariant: the referenced schema's required list
          // and the composing schema's own both count.
          let required =
            referenced.required.iter().any(|r| r == key) || schema.required.iter().any(|r| r == key);
          candidates.push(PropertyCandidate {
            key,
            schema: property,
            required,
            owner_base: to_pascal_case(referenced_name),
          });
        }
      } else {
        for (key, property) in &branch.properties {
          candidates.push(PropertyCandidate {
            key,
            schema: property,
            required: branch.required.iter().any(|r| r == key),
            owner_base: owner_base.to_string(),
          });
        }
      }
    }

    candidates
  }

  fn map_property(
    &self,
    candidate: &PropertyCandidate<'_>,
    rule: Option<&PropertyRule>,
    mapped_override: Option<MappedType>,
  ) -> PropertyModel {
    let schema = candidate.schema;
    let validation = rule.and_then(|r| r.validation.as_ref());

    let is_required = validation
      .and_then(|v| v.required)
      .unwrap_or(candidate.required);
    let is_nullable = self.options.nullable && !is_required;

    let mut enum_type_name = None;
    let mut constants_class_name = None;

    let type_name = if let Some(override_type) = rule.and_then(|r| r.type_override.clone()) {
      // Verbatim override: base mapping and enum detection are both skipped.
      override_type
    } else {
      let mut mapped = mapped_override.unwrap_or_else(|| base_type(schema, &self.formatter));

      if !schema.enum_values.is_empty() {
        match schema.schema_type.as_deref() {
          Some("integer") => {
            let computed = self
              .formatter
              .format(&format!("{}{}", candidate.owner_base, to_pascal_case(candidate.key)));
            if let Some(info) = self.enums.get(&computed) {
              enum_type_name = Some(info.name.clone());
              mapped = MappedType {
                name: info.name.clone(),
                accepts_nullable_marker: true,
              };
            }
          }
          Some("string") => {
            let computed = self
              .formatter
              .format(&format!("{}{}Constants", candidate.owner_base, to_pascal_case(candidate.key)));
            if let Some(info) = self.constants.get(&computed) {
              // The property stays a string; the constants class only feeds
              // the membership validation rule.
              constants_class_name = Some(info.name.clone());
            }
          }
          _ => {}
        }
      }

      if is_nullable && mapped.accepts_nullable_marker {
        format!("{}?", mapped.name)
      } else {
        mapped.name
      }
    };

    let description = if self.include_descriptions {
      rule
        .and_then(|r| r.description.clone())
        .filter(|text| !text.is_empty())
        .or_else(|| schema.description.clone())
    } else {
      None
    };

    let default_value = rule
      .and_then(|r| r.default.as_ref())
      .or(schema.default.as_ref())
      .map(|value| Self::format_default(value, &type_name));

    let mut property = PropertyModel {
      name: to_pascal_case(candidate.key),
      json_name: candidate.key.to_string(),
      type_name,
      description,
      is_required,
      is_nullable,
      min_length: validation.and_then(|v| v.min_length).or(schema.min_length),
      max_length: validation.and_then(|v| v.max_length).or(schema.max_length),
      pattern: validation
        .and_then(|v| v.pattern.clone())
        .or_else(|| schema.pattern.clone()),
      minimum: validation
        .and_then(|v| v.minimum.clone())
        .or_else(|| schema.minimum.clone()),
      maximum: validation
        .and_then(|v| v.maximum.clone())
        .or_else(|| schema.maximum.clone()),
      min_items: schema.min_items,
      max_items: schema.max_items,
      unique_items: schema.unique_items,
      multiple_of: schema.multiple_of.clone(),
      min_properties: schema.min_properties,
      max_properties: schema.max_properties,
      enum_type_name,
      constants_class_name,
      default_value,
      validation_rules: Vec::new(),
    };

    let custom_message = validation.and_then(|v| v.message.as_deref());
    property.validation_rules = self
      .rule_builder
      .build(&property, &schema.enum_values, custom_message);

    property
  }

  fn is_inline_object(schema: &Schema) -> bool {
    schema.reference().is_none()
      && !schema.properties.is_empty()
      && matches!(schema.schema_type.as_deref(), Some("object") | None)
  }

  /// Formats a default literal against the final resolved type: string-typed
  /// properties get quotes, everything else renders the raw literal. A YAML
  /// string default on a numeric property therefore stays unquoted.
  fn format_default(value: &Value, type_name: &str) -> String {
    let literal = match value {
      Value::String(text) => text.clone(),
      other => other.to_string(),
    };
    if type_name == "string" {
      format!("\"{literal}\"")
    } else {
      literal
    }
  }
}
