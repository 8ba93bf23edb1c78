use std::{fs, path::PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    class_builder::GeneratorOptions,
    modifier::ModifierConfiguration,
    orchestrator::{GenerationResult, Orchestrator, SchemaSource},
  },
  ui::{Colors, GenerateCommand},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

pub fn source_from_paths(input: Option<PathBuf>, schema_dir: Option<PathBuf>) -> anyhow::Result<SchemaSource> {
  match (input, schema_dir) {
    (Some(path), None) => Ok(SchemaSource::File(path)),
    (None, Some(path)) => Ok(SchemaSource::Directory(path)),
    _ => anyhow::bail!("exactly one of --input or --schema-dir must be given"),
  }
}

pub fn generate_models(command: GenerateCommand, colors: &Colors) -> anyhow::Result<()> {
  let GenerateCommand {
    input,
    schema_dir,
    config,
    output,
    namespace,
    nullable,
    verbose,
    quiet,
  } = command;

  let source = source_from_paths(input, schema_dir)?;
  let options = GeneratorOptions { namespace, nullable };

  let step = |message: &str| {
    if !quiet {
      println!(
        "{} {}",
        format_timestamp().with(colors.timestamp()),
        message.with(colors.primary())
      );
    }
  };

  step("Loading schema definitions");
  let orchestrator = Orchestrator::new(source, None, options.clone());
  let document = orchestrator.load_document()?;

  let configuration = match config {
    Some(path) => {
      step("Loading modifier configuration");
      Some(ModifierConfiguration::load(&path)?)
    }
    None => None,
  };

  step("Building class models");
  let result = Orchestrator::generate(&document, configuration.as_ref(), &options);

  if verbose && !quiet {
    for class in &result.classes {
      println!(
        "  {} {} ({} properties)",
        "generated".with(colors.success()),
        class.class_name,
        class.properties.len()
      );
    }
  }

  if let Some(path) = output {
    step("Writing model output");
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(&path, result.to_output_json()?)?;
  }

  if !quiet {
    print_summary(&result, colors);
  }

  Ok(())
}

fn print_summary(result: &GenerationResult, colors: &Colors) {
  let stats = &result.stats;

  println!();
  println!("{}", "Generation summary".with(colors.primary()));
  println!("  classes:           {}", stats.classes_generated);
  println!("  nested classes:    {}", stats.nested_classes_generated);
  println!("  properties:        {}", stats.properties_generated);
  println!("  enum types:        {}", stats.enum_types_generated);
  println!("  constants classes: {}", stats.constants_classes_generated);
  if stats.definitions_excluded > 0 || stats.properties_excluded > 0 {
    println!(
      "  excluded:          {} definition(s), {} propert(ies)",
      stats.definitions_excluded, stats.properties_excluded
    );
  }

  if !stats.warnings.is_empty() {
    println!();
    println!(
      "{} {} warning(s):",
      "!".with(colors.warning()),
      stats.warnings.len()
    );
    for warning in &stats.warnings {
      println!("  {}", warning.to_string().with(colors.warning()));
    }
  }
}
