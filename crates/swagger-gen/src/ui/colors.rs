use std::io::IsTerminal;

use clap::ValueEnum;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub struct Colors {
  enabled: bool,
}

impl Colors {
  pub const fn new(enabled: bool) -> Self {
    Self { enabled }
  }

  pub const fn timestamp(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    Color::DarkCyan
  }

  pub const fn primary(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    Color::Cyan
  }

  pub const fn success(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    Color::Green
  }

  pub const fn warning(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    Color::Yellow
  }

  pub const fn error(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    Color::Red
  }
}
