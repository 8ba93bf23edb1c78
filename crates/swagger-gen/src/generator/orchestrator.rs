use std::path::PathBuf;

use serde::Serialize;

use crate::generator::{
  class_builder::{ClassModelBuilder, GeneratorOptions},
  errors::GeneratorError,
  merger::SchemaDirectoryMerger,
  metrics::{GenerationStats, GenerationWarning},
  model::{ClassModel, ConstantsInfo, EnumInfo},
  modifier::ModifierConfiguration,
  path_validator::{PathValidationError, SchemaPathValidator},
  schema::SwaggerDocument,
};

/// Where the schema definitions come from: one Swagger 2.0 document or a
/// directory of independent JSON Schema files.
#[derive(Debug, Clone)]
pub enum SchemaSource {
  File(PathBuf),
  Directory(PathBuf),
}

/// Drives one generation run: load → configure → validate paths → sweep
/// enums → build class models. Single-pass and synchronous; a run either
/// produces the full result or fails with no partial output.
pub struct Orchestrator {
  source: SchemaSource,
  config_path: Option<PathBuf>,
  options: GeneratorOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
  pub classes: Vec<ClassModel>,
  pub enums: Vec<EnumInfo>,
  pub constants: Vec<ConstantsInfo>,
  /// Advisory; the run proceeds past these and reports them as warnings.
  pub path_errors: Vec<PathValidationError>,
  pub stats: GenerationStats,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelOutput<'a> {
  classes: &'a [ClassModel],
  enums: &'a [EnumInfo],
  constants: &'a [ConstantsInfo],
}

impl GenerationResult {
  /// Serializes the renderer contract (classes plus enum/constants maps) as
  /// pretty JSON for an external template engine.
  pub fn to_output_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ModelOutput {
      classes: &self.classes,
      enums: &self.enums,
      constants: &self.constants,
    })
  }
}

impl Orchestrator {
  pub fn new(source: SchemaSource, config_path: Option<PathBuf>, options: GeneratorOptions) -> Self {
    Self {
      source,
      config_path,
      options,
    }
  }

  pub fn run(&self) -> Result<GenerationResult, GeneratorError> {
    let document = self.load_document()?;
    let config = self
      .config_path
      .as_deref()
      .map(ModifierConfiguration::load)
      .transpose()?;

    Ok(Self::generate(&document, config.as_ref(), &self.options))
  }

  pub fn load_document(&self) -> Result<SwaggerDocument, GeneratorError> {
    match &self.source {
      SchemaSource::File(path) => SwaggerDocument::load(path),
      SchemaSource::Directory(path) => SchemaDirectoryMerger::merge(path),
    }
  }

  /// In-memory entry point used by the command drivers and tests.
  pub fn generate(
    document: &SwaggerDocument,
    config: Option<&ModifierConfiguration>,
    options: &GeneratorOptions,
  ) -> GenerationResult {
    let mut stats = GenerationStats::default();

    let path_errors = config
      .map(|c| SchemaPathValidator::validate(c, document))
      .unwrap_or_default();
    stats.record_warnings(path_errors.iter().map(|error| GenerationWarning::InvalidRulePath {
      path: error.path.clone(),
      message: error.message.clone(),
    }));

    let mut builder = ClassModelBuilder::new(&document.definitions, config, options);
    builder.collect_enum_types(&mut stats);

    let mut classes = Vec::new();
    for (name, schema) in &document.definitions {
      // Excluding a root definition path drops the whole type: no class
      // model, no validator metadata.
      if config.is_some_and(|c| !c.is_included(name)) {
        stats.record_excluded_definition();
        continue;
      }

      let built = builder.build_classes(name, schema, &mut stats);
      if let Some((_, nested)) = built.split_first() {
        stats.record_class();
        for _ in nested {
          stats.record_nested_class();
        }
      }
      classes.extend(built);
    }

    let enums = builder.enums().values().cloned().collect();
    let constants = builder.constants().values().cloned().collect();

    GenerationResult {
      classes,
      enums,
      constants,
      path_errors,
      stats,
    }
  }
}
