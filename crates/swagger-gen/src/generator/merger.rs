use std::{fs, mem, path::Path};

use indexmap::IndexMap;

use crate::generator::{
  errors::GeneratorError,
  schema::{Info, Schema, SwaggerDocument, ref_name},
};

/// Merges a directory of independent JSON Schema files into one Swagger
/// document.
///
/// Each file contributes its root schema (named by `title`, falling back to
/// the file name) and any entries of its internal `definitions` block.
/// Duplicate names are allowed only when the schemas are semantically equal;
/// conflicting shapes abort the whole merge. After merging, every `$ref` in
/// the set must resolve or the merge fails.
pub struct SchemaDirectoryMerger;

struct MergedDefinition {
  schema: Schema,
  origin: String,
}

impl SchemaDirectoryMerger {
  pub fn merge(directory: &Path) -> Result<SwaggerDocument, GeneratorError> {
    if !directory.is_dir() {
      return Err(GeneratorError::DirectoryNotFound(directory.to_path_buf()));
    }

    let mut files: Vec<_> = fs::read_dir(directory)?
      .filter_map(Result::ok)
      .map(|entry| entry.path())
      .filter(|path| {
        path.is_file()
          && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"))
      })
      .collect();
    files.sort();

    if files.is_empty() {
      return Err(GeneratorError::NoSchemasFound(directory.to_path_buf()));
    }

    let mut merged: IndexMap<String, MergedDefinition> = IndexMap::new();

    for path in &files {
      let file_label = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
      let text = fs::read_to_string(path)?;
      let mut schema: Schema = serde_json::from_str(&text).map_err(|e| GeneratorError::SchemaParse {
        file: file_label.clone(),
        message: e.to_string(),
      })?;

      let internal_definitions = mem::take(&mut schema.definitions);

      let draft_name = schema
        .title
        .clone()
        .unwrap_or_else(|| path.file_stem().and_then(|s| s.to_str()).unwrap_or_default().to_string());

      Self::add_definition(&mut merged, draft_name, schema, file_label.clone())?;

      for (name, definition) in internal_definitions {
        Self::add_definition(
          &mut merged,
          name,
          definition,
          format!("{file_label} (internal definition)"),
        )?;
      }
    }

    Self::check_references(&merged)?;

    let definitions = merged.into_iter().map(|(name, entry)| (name, entry.schema)).collect();

    Ok(SwaggerDocument {
      swagger: Some("2.0".to_string()),
      info: Some(Info {
        title: "Merged Schemas".to_string(),
        version: "1.0".to_string(),
        description: None,
      }),
      definitions,
    })
  }

  fn add_definition(
    merged: &mut IndexMap<String, MergedDefinition>,
    name: String,
    schema: Schema,
    origin: String,
  ) -> Result<(), GeneratorError> {
    if let Some(existing) = merged.get(&name) {
      // Identical duplicates across files are intentional and skipped.
      if existing.schema.equivalent(&schema) {
        return Ok(());
      }
      return Err(GeneratorError::ConflictingDefinition {
        name,
        first_source: existing.origin.clone(),
        second_source: origin,
      });
    }

    merged.insert(name, MergedDefinition { schema, origin });
    Ok(())
  }

  fn check_references(merged: &IndexMap<String, MergedDefinition>) -> Result<(), GeneratorError> {
    for (name, entry) in merged {
      Self::check_schema_references(name, &entry.schema, merged)?;
    }
    Ok(())
  }

  fn check_schema_references(
    definition: &str,
    schema: &Schema,
    merged: &IndexMap<String, MergedDefinition>,
  ) -> Result<(), GeneratorError> {
    if let Some(reference) = schema.reference() {
      let resolvable = ref_name(reference).is_some_and(|target| merged.contains_key(target));
      if !resolvable {
        return Err(GeneratorError::UnresolvedReference {
          definition: definition.to_string(),
          reference: reference.to_string(),
        });
      }
    }

    for property in schema.properties.values() {
      Self::check_schema_references(definition, property, merged)?;
    }
    for branch in &schema.all_of {
      Self::check_schema_references(definition, branch, merged)?;
    }
    if let Some(ref items) = schema.items {
      Self::check_schema_references(definition, items, merged)?;
    }
    if let Some(crate::generator::schema::AdditionalProperties::Constrained(ref extra)) = schema.additional_properties
    {
      Self::check_schema_references(definition, extra, merged)?;
    }

    Ok(())
  }
}
