use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures raised by the schema loading and model building pipeline.
///
/// Rule-path validation problems are deliberately absent here: they are
/// advisory and surface as [`crate::generator::path_validator::PathValidationError`]
/// values instead of aborting the run.
#[derive(Debug, Error)]
pub enum GeneratorError {
  #[error("schema directory not found: {}", .0.display())]
  DirectoryNotFound(PathBuf),

  #[error("file not found: {}", .0.display())]
  FileNotFound(PathBuf),

  #[error("no schema files (*.json) found in {}", .0.display())]
  NoSchemasFound(PathBuf),

  #[error("definition '{name}' from '{second_source}' conflicts with the definition loaded from '{first_source}'")]
  ConflictingDefinition {
    name: String,
    first_source: String,
    second_source: String,
  },

  #[error("unresolved reference '{reference}' in definition '{definition}'")]
  UnresolvedReference { definition: String, reference: String },

  #[error("failed to parse schema file '{file}': {message}")]
  SchemaParse { file: String, message: String },

  #[error("failed to parse configuration '{file}': {message}")]
  ConfigurationParse { file: String, message: String },

  #[error("unsupported configuration format '{0}': expected .yml, .yaml or .json")]
  UnsupportedConfigurationFormat(String),

  #[error("invalid Swagger document: {0}")]
  InvalidSwaggerDocument(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}
