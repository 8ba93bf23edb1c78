#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, Commands, colors};

mod generator;
mod ui;

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color));

  match cli.command {
    Commands::Generate(command) => ui::commands::generate_models(command, &colors)?,
    Commands::Check(command) => ui::commands::check_configuration(command, &colors)?,
  }

  Ok(())
}
