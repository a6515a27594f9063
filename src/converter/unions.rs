use serde_json::Value;

use crate::avro::is_null;
use crate::converter::state::Registry;
use crate::converter::types::graphql_type;
use crate::error::SchemaError;
use crate::graphql::{bare, render_union, union_name};

/// Split a choice node into its non-null alternatives.
///
/// Every `"null"` marker is dropped; the flag reports whether one was present.
pub fn split_nullable(alternatives: &[Value]) -> (Vec<&Value>, bool) {
    let members: Vec<&Value> = alternatives.iter().filter(|t| !is_null(t)).collect();
    let nullable = members.len() != alternatives.len();
    (members, nullable)
}

/// Declare the synthetic union over two or more alternatives and return its name.
///
/// Members are referenced by bare name. The union name is the concatenation
/// of those names, so two choices over the same sequence share a declaration.
pub fn synthesize_union(
    alternatives: &[&Value],
    registry: &mut Registry,
) -> Result<String, SchemaError> {
    let resolved = alternatives
        .iter()
        .map(|alt| graphql_type(alt, registry))
        .collect::<Result<Vec<_>, _>>()?;
    let members: Vec<&str> = resolved.iter().map(|r| bare(r)).collect();

    let name = union_name(&members);
    registry.declare_once(&name, || render_union(&name, &members));
    Ok(name)
}
