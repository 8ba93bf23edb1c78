pub mod cli;
pub mod colors;
pub mod commands;

pub use cli::{CheckCommand, Cli, Commands, GenerateCommand};
pub use colors::{ColorMode, Colors};
