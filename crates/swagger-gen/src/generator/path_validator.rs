use crate::generator::{
  modifier::ModifierConfiguration,
  schema::{SwaggerDocument, ref_name},
};

/// A rule path that failed to resolve against the document's definitions.
/// Advisory: callers decide whether to proceed or abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathValidationError {
  pub path: String,
  pub message: String,
}

pub struct SchemaPathValidator;

impl SchemaPathValidator {
  /// Checks every non-wildcard rule path in the configuration against the
  /// document: the first segment must name a definition, and each further
  /// segment must name a property of the current schema, following `$ref`
  /// into the referenced definition before descending.
  pub fn validate(config: &ModifierConfiguration, document: &SwaggerDocument) -> Vec<PathValidationError> {
    config
      .rules
      .keys()
      .filter(|path| !path.contains('*'))
      .filter_map(|path| Self::validate_path(path, document).err())
      .collect()
  }

  fn validate_path(path: &str, document: &SwaggerDocument) -> Result<(), PathValidationError> {
    let not_found = || PathValidationError {
      path: path.to_string(),
      message: format!("the path '{path}' was not found in the Swagger definition"),
    };

    let mut segments = path.split('.');
    let root = segments.next().ok_or_else(not_found)?;
    let mut current = document.definitions.get(root).ok_or_else(not_found)?;

    for segment in segments {
      let property = current.properties.get(segment).ok_or_else(not_found)?;

      current = match property.reference() {
        Some(reference) => ref_name(reference)
          .and_then(|name| document.definitions.get(name))
          .ok_or_else(not_found)?,
        None => property,
      };
    }

    Ok(())
  }
}
