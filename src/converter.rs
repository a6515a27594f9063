pub mod enums;
pub mod records;
pub mod source;
pub mod state;
pub mod types;
pub mod unions;

pub use state::Registry;

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::avro::RecordSchema;
use crate::error::{ConvertError, SchemaError};
use crate::graphql::HEADER;
use records::declare_record;
use source::read_source;

/// Convert an in-memory Avro schema into GraphQL SDL.
///
/// The root must be a record. The output is the federation header, the root
/// `type`, then every other declared type in the order it was first
/// discovered, blocks separated by a blank line.
pub fn avsc_to_graphql(schema: &Value) -> Result<String, SchemaError> {
    let root = RecordSchema::root(schema)?;
    let mut registry = Registry::new();
    declare_record(&root, &mut registry)?;
    tracing::debug!(
        root = root.name,
        declarations = registry.len(),
        "converted schema"
    );
    Ok(assemble(root.name, registry))
}

fn assemble(root_name: &str, mut registry: Registry) -> String {
    let mut blocks = Vec::with_capacity(registry.len());
    blocks.extend(registry.take(root_name));
    blocks.extend(registry.into_declarations());

    let mut out = String::from(HEADER);
    out.push('\n');
    out.push_str(&blocks.join("\n\n"));
    out.push('\n');
    out
}

/// Convert an Avro schema file into GraphQL SDL.
///
/// # Arguments
/// * `avsc_path` - Path or URL of the `.avsc` input.
/// * `output_path` - File to write, replacing existing content. When `None`
///   the SDL goes to stdout.
pub fn convert_avsc_to_graphql(
    avsc_path: &str,
    output_path: Option<&Path>,
) -> Result<(), ConvertError> {
    let content = read_source(avsc_path)?;
    let schema: Value = serde_json::from_str(&content)?;
    let graphql = avsc_to_graphql(&schema)?;

    match output_path {
        Some(path) => {
            fs::write(path, &graphql)?;
            tracing::debug!(path = %path.display(), "wrote GraphQL schema");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(graphql.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
