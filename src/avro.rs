use serde::Deserialize;
use serde_json::Value;

use crate::error::SchemaError;

/// Marker that makes a choice node nullable.
pub const NULL: &str = "null";

/// Avro primitive type tokens with a GraphQL counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    String,
    Int,
    Long,
    Boolean,
    Double,
    Float,
}

/// Avro `logicalType` annotations with a GraphQL scalar counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogicalType {
    Uuid,
    Decimal,
    TimestampMillis,
    TimestampMicros,
    TimeMillis,
    TimeMicros,
    Date,
}

/// One field of a record.
#[derive(Debug, Clone, Copy)]
pub struct AvroField<'a> {
    pub name: &'a str,
    pub field_type: &'a Value,
}

/// Borrowed view of an Avro record.
#[derive(Debug, Clone)]
pub struct RecordSchema<'a> {
    pub name: &'a str,
    pub fields: Vec<AvroField<'a>>,
}

/// Borrowed view of an Avro enum.
#[derive(Debug, Clone)]
pub struct EnumSchema<'a> {
    pub name: &'a str,
    pub symbols: Vec<&'a str>,
}

/// The shape of a single schema node.
#[derive(Debug, Clone)]
pub enum AvroNode<'a> {
    Primitive(Primitive),
    /// Any other bare string token; only valid if the name is registered.
    Reference(&'a str),
    /// A JSON array of alternatives, `null` markers included.
    Union(&'a [Value]),
    Logical(LogicalType),
    Enum(EnumSchema<'a>),
    /// `{"type": "string"}` without a recognized logical type.
    String,
    Array(&'a Value),
    Map,
    Record(RecordSchema<'a>),
}

impl<'a> AvroNode<'a> {
    /// Classify `node` into one of the supported forms.
    ///
    /// Logical types take precedence over the underlying `type`, so
    /// `{"type": "long", "logicalType": "timestamp-millis"}` is
    /// [`AvroNode::Logical`]. Shapes matching nothing return
    /// [`SchemaError::UnsupportedType`].
    pub fn classify(node: &'a Value) -> Result<Self, SchemaError> {
        match node {
            Value::String(token) => Ok(match Primitive::deserialize(node) {
                Ok(primitive) => AvroNode::Primitive(primitive),
                Err(_) => AvroNode::Reference(token),
            }),
            Value::Array(alternatives) => Ok(AvroNode::Union(alternatives)),
            Value::Object(obj) => {
                if let Some(logical) = obj
                    .get("logicalType")
                    .and_then(|l| LogicalType::deserialize(l).ok())
                {
                    return Ok(AvroNode::Logical(logical));
                }
                match obj.get("type").and_then(Value::as_str) {
                    Some("enum") => EnumSchema::parse(node).map(AvroNode::Enum),
                    Some("string") => Ok(AvroNode::String),
                    Some("array") => obj
                        .get("items")
                        .map(AvroNode::Array)
                        .ok_or_else(|| SchemaError::unsupported(node)),
                    Some("record") => RecordSchema::parse(node).map(AvroNode::Record),
                    Some("map") => Ok(AvroNode::Map),
                    _ => Err(SchemaError::unsupported(node)),
                }
            }
            _ => Err(SchemaError::unsupported(node)),
        }
    }
}

impl<'a> RecordSchema<'a> {
    /// Validate the top-level record of a schema document.
    pub fn root(schema: &'a Value) -> Result<Self, SchemaError> {
        if schema.get("type").and_then(Value::as_str) != Some("record") {
            return Err(SchemaError::shape("root type must be a record"));
        }
        let name = schema
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| SchemaError::shape("name is required"))?;
        let fields = schema
            .get("fields")
            .and_then(Value::as_array)
            .ok_or_else(|| SchemaError::shape("fields are required"))?;
        Self::with_fields(name, fields)
    }

    /// Parse a nested record node.
    pub fn parse(node: &'a Value) -> Result<Self, SchemaError> {
        let name = node.get("name").and_then(Value::as_str);
        let fields = node.get("fields").and_then(Value::as_array);
        match (name, fields) {
            (Some(name), Some(fields)) => Self::with_fields(name, fields),
            _ => Err(SchemaError::unsupported(node)),
        }
    }

    fn with_fields(name: &'a str, fields: &'a [Value]) -> Result<Self, SchemaError> {
        let fields = fields
            .iter()
            .map(|field| {
                match (
                    field.get("name").and_then(Value::as_str),
                    field.get("type"),
                ) {
                    (Some(field_name), Some(field_type)) => Ok(AvroField {
                        name: field_name,
                        field_type,
                    }),
                    _ => Err(SchemaError::malformed_field(name, field)),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { name, fields })
    }

    /// The field used as the federation key, if any: the first one named `id`.
    pub fn key_field(&self) -> Option<&'a str> {
        self.fields.iter().find(|f| f.name == "id").map(|f| f.name)
    }
}

impl<'a> EnumSchema<'a> {
    /// Parse an enum node; `name` and a list of string `symbols` are required.
    pub fn parse(node: &'a Value) -> Result<Self, SchemaError> {
        let unsupported = || SchemaError::unsupported(node);
        let name = node.get("name").and_then(Value::as_str).ok_or_else(unsupported)?;
        let symbols = node
            .get("symbols")
            .and_then(Value::as_array)
            .ok_or_else(unsupported)?
            .iter()
            .map(|s| s.as_str().ok_or_else(unsupported))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { name, symbols })
    }
}

/// Whether `node` is the bare `"null"` marker.
pub fn is_null(node: &Value) -> bool {
    node.as_str() == Some(NULL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_tokens() {
        assert!(matches!(
            AvroNode::classify(&json!("long")),
            Ok(AvroNode::Primitive(Primitive::Long))
        ));
        assert!(matches!(
            AvroNode::classify(&json!("Status")),
            Ok(AvroNode::Reference("Status"))
        ));
    }

    #[test]
    fn test_logical_type_wins_over_type() {
        let node = json!({"type": "string", "logicalType": "uuid"});
        assert!(matches!(
            AvroNode::classify(&node),
            Ok(AvroNode::Logical(LogicalType::Uuid))
        ));
    }

    #[test]
    fn test_unknown_logical_type_falls_back_to_type() {
        let node = json!({"type": "string", "logicalType": "iso-date"});
        assert!(matches!(AvroNode::classify(&node), Ok(AvroNode::String)));

        let fixed = json!({"type": "fixed", "size": 12, "logicalType": "duration"});
        assert!(matches!(
            AvroNode::classify(&fixed),
            Err(SchemaError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_array_without_items_is_unsupported() {
        assert!(matches!(
            AvroNode::classify(&json!({"type": "array"})),
            Err(SchemaError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_enum_requires_string_symbols() {
        let node = json!({"type": "enum", "name": "Status", "symbols": ["ok", 1]});
        assert!(matches!(
            AvroNode::classify(&node),
            Err(SchemaError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_root_shape_errors() {
        let cases = [
            json!({"type": "enum", "name": "Test", "fields": []}),
            json!({"type": "record", "fields": []}),
            json!({"type": "record", "name": "Test"}),
        ];
        for schema in &cases {
            assert!(matches!(
                RecordSchema::root(schema),
                Err(SchemaError::SchemaShape { .. })
            ));
        }
    }

    #[test]
    fn test_field_without_type_is_malformed() {
        let schema = json!({"type": "record", "name": "Test", "fields": [{"name": "a"}]});
        match RecordSchema::root(&schema) {
            Err(SchemaError::MalformedField { record, .. }) => assert_eq!(record, "Test"),
            other => panic!("expected malformed field, got {other:?}"),
        }
    }

    #[test]
    fn test_key_field_is_first_id() {
        let schema = json!({
            "type": "record",
            "name": "User",
            "fields": [
                {"name": "name", "type": "string"},
                {"name": "id", "type": "long"},
            ],
        });
        let record = RecordSchema::root(&schema).unwrap();
        assert_eq!(record.key_field(), Some("id"));
    }
}
