use serde_json::Value;

use crate::avro::AvroNode;
use crate::converter::enums::declare_enum;
use crate::converter::records::declare_record;
use crate::converter::state::Registry;
use crate::converter::unions::{split_nullable, synthesize_union};
use crate::error::SchemaError;
use crate::graphql::{JSON_OBJECT, STRING, bare, type_ref};

/// Convert an Avro type node into a GraphQL type reference.
///
/// References are non-null (`String!`) unless the node is a choice that
/// includes `"null"`. Records, enums and multi-member choices are declared
/// in `registry` as a side effect; the returned reference names them.
pub fn graphql_type(node: &Value, registry: &mut Registry) -> Result<String, SchemaError> {
    let (base, nullable) = match AvroNode::classify(node)? {
        AvroNode::Union(alternatives) => {
            let (members, nullable) = split_nullable(alternatives);
            let base = match members.as_slice() {
                [] => return Err(SchemaError::unsupported(node)),
                [single] => bare(&graphql_type(single, registry)?).to_string(),
                _ => synthesize_union(&members, registry)?,
            };
            (base, nullable)
        }
        other => (base_type(other, node, registry)?, false),
    };

    let resolved = type_ref(&base, nullable);
    tracing::trace!(%node, %resolved, "resolved type reference");
    Ok(resolved)
}

/// Base type name of a non-choice node, without any non-null marker.
fn base_type(
    avro: AvroNode<'_>,
    node: &Value,
    registry: &mut Registry,
) -> Result<String, SchemaError> {
    let base = match avro {
        AvroNode::Primitive(primitive) => primitive.scalar().to_string(),
        AvroNode::Reference(name) if registry.contains(name) => name.to_string(),
        AvroNode::Logical(logical) => logical.scalar().to_string(),
        AvroNode::Enum(schema) => {
            declare_enum(&schema, registry);
            schema.name.to_string()
        }
        AvroNode::String => STRING.to_string(),
        AvroNode::Array(items) => format!("[{}]", graphql_type(items, registry)?),
        AvroNode::Map => JSON_OBJECT.to_string(),
        AvroNode::Record(schema) => {
            declare_record(&schema, registry)?;
            schema.name.to_string()
        }
        AvroNode::Reference(_) | AvroNode::Union(_) => {
            return Err(SchemaError::unsupported(node));
        }
    };
    Ok(base)
}
