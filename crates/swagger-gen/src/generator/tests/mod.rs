mod path_validator;
mod schema;
mod support;
mod validation_rules;
