//! GraphQL SDL vocabulary and declaration renderers.

use crate::avro::{LogicalType, Primitive};

/// Federation link plus the custom scalars referenced by converted types.
pub const HEADER: &str = r#"extend schema @link(url: "https://specs.apollo.dev/federation/v2.0", import: ["@key", "@shareable"])

scalar Date
scalar Decimal
scalar DateTime
scalar JSONObject
scalar Time
scalar UUID
"#;

pub const NON_NULL: char = '!';
pub const UNION_PREFIX: &str = "Union";
pub const UNION_SEPARATOR: &str = " | ";
/// Opaque scalar every Avro map collapses to.
pub const JSON_OBJECT: &str = "JSONObject";
pub const STRING: &str = "String";

const INDENT: &str = "    ";

impl Primitive {
    /// The built-in GraphQL scalar for this primitive.
    pub fn scalar(self) -> &'static str {
        match self {
            Primitive::String => STRING,
            Primitive::Int | Primitive::Long => "Int",
            Primitive::Boolean => "Boolean",
            Primitive::Double | Primitive::Float => "Float",
        }
    }
}

impl LogicalType {
    /// The custom scalar declared in [`HEADER`] for this logical type.
    pub fn scalar(self) -> &'static str {
        match self {
            LogicalType::Uuid => "UUID",
            LogicalType::Decimal => "Decimal",
            LogicalType::TimestampMillis | LogicalType::TimestampMicros => "DateTime",
            LogicalType::TimeMillis | LogicalType::TimeMicros => "Time",
            LogicalType::Date => "Date",
        }
    }
}

/// Render a type reference, appending the non-null marker unless `nullable`.
pub fn type_ref(base: &str, nullable: bool) -> String {
    if nullable {
        base.to_string()
    } else {
        format!("{base}{NON_NULL}")
    }
}

/// Drop one trailing non-null marker.
pub fn bare(type_ref: &str) -> &str {
    type_ref.strip_suffix(NON_NULL).unwrap_or(type_ref)
}

/// Render a `type` declaration.
///
/// A record without fields renders as the header line alone (`type Test`),
/// since `type Test {}` is not valid SDL.
pub fn render_record(name: &str, key: Option<&str>, fields: &[(&str, String)]) -> String {
    let mut out = format!("type {name}");
    if fields.is_empty() {
        return out;
    }
    if let Some(key) = key {
        out.push_str(&format!(" @key(fields: \"{key}\")"));
    }
    out.push_str(" {\n");
    for (field, ty) in fields {
        out.push_str(&format!("{INDENT}{field}: {ty}\n"));
    }
    out.push('}');
    out
}

/// Render an `enum` declaration with one symbol per line.
pub fn render_enum(name: &str, symbols: &[&str]) -> String {
    let mut out = format!("enum {name} {{\n");
    for symbol in symbols {
        out.push_str(&format!("{INDENT}{symbol}\n"));
    }
    out.push('}');
    out
}

/// Render a `union` declaration.
pub fn render_union(name: &str, members: &[&str]) -> String {
    format!("union {name} = {}", members.join(UNION_SEPARATOR))
}

/// Name of the synthetic union over `members`.
pub fn union_name(members: &[&str]) -> String {
    format!("{UNION_PREFIX}{}", members.concat())
}
