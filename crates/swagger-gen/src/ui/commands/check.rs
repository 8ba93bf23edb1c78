use crossterm::style::Stylize;

use super::generate::source_from_paths;
use crate::{
  generator::{
    class_builder::GeneratorOptions,
    modifier::ModifierConfiguration,
    orchestrator::{Orchestrator, SchemaSource},
    path_validator::SchemaPathValidator,
    schema::SwaggerDocument,
  },
  ui::{CheckCommand, Colors},
};

/// Validates every non-wildcard rule path in a configuration against the
/// schema definitions; invalid paths fail the command.
pub fn check_configuration(command: CheckCommand, colors: &Colors) -> anyhow::Result<()> {
  let CheckCommand {
    config,
    input,
    schema_dir,
  } = command;

  let source = source_from_paths(input, schema_dir)?;
  let document = load_document(source)?;
  let configuration = ModifierConfiguration::load(&config)?;

  let errors = SchemaPathValidator::validate(&configuration, &document);
  if errors.is_empty() {
    println!(
      "{} all rule paths resolve against the schema",
      "ok".with(colors.success())
    );
    return Ok(());
  }

  for error in &errors {
    println!("{} {}", "error".with(colors.error()), error.message);
  }
  anyhow::bail!("{} invalid rule path(s)", errors.len())
}

fn load_document(source: SchemaSource) -> anyhow::Result<SwaggerDocument> {
  let orchestrator = Orchestrator::new(source, None, GeneratorOptions::default());
  Ok(orchestrator.load_document()?)
}
