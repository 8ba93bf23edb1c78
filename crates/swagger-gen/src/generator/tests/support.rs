use serde_json::Value;

use crate::generator::schema::{Info, Schema, SwaggerDocument};

pub(crate) fn schema(value: Value) -> Schema {
  serde_json::from_value(value).expect("test schema should deserialize")
}

pub(crate) fn document(definitions: Value) -> SwaggerDocument {
  SwaggerDocument {
    swagger: Some("2.0".to_string()),
    info: Some(Info {
      title: "Test API".to_string(),
      version: "1.0".to_string(),
      description: None,
    }),
    definitions: serde_json::from_value(definitions).expect("test definitions should deserialize"),
  }
}
