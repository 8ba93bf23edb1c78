mod check;
mod generate;

pub use check::check_configuration;
pub use generate::generate_models;
