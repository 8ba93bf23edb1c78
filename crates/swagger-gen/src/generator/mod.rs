pub(crate) mod class_builder;
pub(crate) mod errors;
pub(crate) mod merger;
pub(crate) mod metrics;
pub(crate) mod model;
pub(crate) mod modifier;
pub(crate) mod naming;
pub mod orchestrator;
pub(crate) mod path_validator;
pub(crate) mod schema;
pub(crate) mod validation_rules;

#[cfg(test)]
mod tests;
