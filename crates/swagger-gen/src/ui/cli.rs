use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "swagger-gen")]
#[command(author, version, about = "Swagger 2.0 DTO and validator model generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate class models from a Swagger document or a schema directory
  Generate(GenerateCommand),
  /// Validate a modifier configuration's rule paths against the schema
  Check(CheckCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to a single Swagger 2.0 JSON document
  #[arg(short, long, value_name = "FILE", conflicts_with = "schema_dir", required_unless_present = "schema_dir")]
  pub input: Option<PathBuf>,

  /// Directory of JSON Schema files to merge into one document
  #[arg(long, value_name = "DIR")]
  pub schema_dir: Option<PathBuf>,

  /// Optional modifier configuration (.yml, .yaml or .json)
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Path where the serialized class models will be written (stdout summary only when omitted)
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Namespace stamped on generated classes (overridden by the configuration's global namespace)
  #[arg(short, long, default_value = "Generated")]
  pub namespace: String,

  /// Mark non-required properties as nullable
  #[arg(long, default_value_t = false)]
  pub nullable: bool,

  /// Enable verbose output with per-definition progress
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct CheckCommand {
  /// Modifier configuration to validate
  #[arg(short, long, value_name = "FILE")]
  pub config: PathBuf,

  /// Path to a single Swagger 2.0 JSON document
  #[arg(short, long, value_name = "FILE", conflicts_with = "schema_dir", required_unless_present = "schema_dir")]
  pub input: Option<PathBuf>,

  /// Directory of JSON Schema files to merge before validating
  #[arg(long, value_name = "DIR")]
  pub schema_dir: Option<PathBuf>,
}
