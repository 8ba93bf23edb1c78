use strum::Display;

/// Counters and accumulated warnings for one generation run, reported by the
/// CLI summary after the run completes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub classes_generated: usize,
  pub nested_classes_generated: usize,
  pub properties_generated: usize,
  pub enum_types_generated: usize,
  pub constants_classes_generated: usize,
  pub definitions_excluded: usize,
  pub properties_excluded: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_class(&mut self) {
    self.classes_generated += 1;
  }

  pub fn record_nested_class(&mut self) {
    self.nested_classes_generated += 1;
    self.classes_generated += 1;
  }

  pub fn record_property(&mut self) {
    self.properties_generated += 1;
  }

  pub fn record_excluded_definition(&mut self) {
    self.definitions_excluded += 1;
  }

  pub fn record_excluded_property(&mut self) {
    self.properties_excluded += 1;
  }

  pub fn record_enum_type(&mut self) {
    self.enum_types_generated += 1;
  }

  pub fn record_constants_class(&mut self) {
    self.constants_classes_generated += 1;
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Configuration rule path '{path}': {message}")]
  InvalidRulePath { path: String, message: String },
  #[strum(to_string = "Definition '{definition}': allOf reference '{reference}' does not resolve, branch skipped")]
  UnresolvedAllOfReference { definition: String, reference: String },
  #[strum(
    to_string = "Property '{path}' exceeds the maximum nesting depth of {limit}, mapped to the open object type"
  )]
  MaxDepthExceeded { path: String, limit: usize },
}
