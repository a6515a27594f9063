//! Error types for schema translation and the I/O around it.

use serde_json::Value;
use thiserror::Error;

/// Error raised while translating an in-memory Avro schema.
///
/// Every variant is fatal to the translation call: no partial output is
/// produced once one of these is returned.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The root node is not a usable record.
    #[error("schema shape error: {message}")]
    SchemaShape {
        /// What the root is missing.
        message: String,
    },

    /// A node matched none of the supported Avro forms.
    #[error("type {node} not supported")]
    UnsupportedType {
        /// The offending node.
        node: Value,
    },

    /// A record field without a string `name` or without a `type`.
    #[error("malformed field {field} in record '{record}'")]
    MalformedField {
        /// Record holding the field.
        record: String,
        /// The offending field object.
        field: Value,
    },
}

impl SchemaError {
    /// Creates a schema shape error with the given message.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::SchemaShape {
            message: message.into(),
        }
    }

    /// Creates an unsupported type error carrying a copy of `node`.
    pub fn unsupported(node: &Value) -> Self {
        Self::UnsupportedType { node: node.clone() }
    }

    /// Creates a malformed field error.
    pub fn malformed_field(record: impl Into<String>, field: &Value) -> Self {
        Self::MalformedField {
            record: record.into(),
            field: field.clone(),
        }
    }
}

/// Error type for reading, converting and writing a schema file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Translation error.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not valid JSON.
    #[error("invalid Avro schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Remote schema could not be fetched.
    #[error("HTTP fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// URL scheme other than `http`, `https` or `file`.
    #[error("unsupported scheme: {scheme}")]
    UnsupportedScheme {
        /// The rejected scheme.
        scheme: String,
    },

    /// A `file://` URL that does not map to a local path.
    #[error("invalid file URL: {location}")]
    InvalidLocation {
        /// The rejected location.
        location: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unsupported_type_display_carries_node() {
        let err = SchemaError::unsupported(&json!({"type": "fixed", "size": 16}));
        assert_eq!(
            err.to_string(),
            r#"type {"type":"fixed","size":16} not supported"#
        );
    }

    #[test]
    fn test_schema_error_is_transparent_in_convert_error() {
        let err = ConvertError::from(SchemaError::shape("fields are required"));
        assert_eq!(err.to_string(), "schema shape error: fields are required");
    }
}
