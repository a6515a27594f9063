//! # avsc2graphql
//!
//! Convert [Apache Avro](https://avro.apache.org/) record schemas into
//! [GraphQL](https://graphql.org/) SDL with the Apollo federation v2 link.
//!
//! ## Features
//!
//! - Maps Avro primitives and logical types to GraphQL scalars
//! - Declares nested records, enums and multi-member unions once, in
//!   discovery order
//! - Marks records with an `id` field as federation entities (`@key`)
//! - Collapses maps into the opaque `JSONObject` scalar
//! - CLI tool `avsc2graphql` for file conversion
//!
//! ## Example (Programmatic Usage)
//!
//! ```
//! use serde_json::json;
//! use avsc2graphql::avsc_to_graphql;
//!
//! let schema = json!({
//!     "type": "record",
//!     "name": "User",
//!     "fields": [
//!         {"name": "id", "type": {"type": "string", "logicalType": "uuid"}},
//!         {"name": "nickname", "type": ["null", "string"]}
//!     ]
//! });
//!
//! let sdl = avsc_to_graphql(&schema).unwrap();
//! assert!(sdl.contains("type User @key(fields: \"id\") {\n    id: UUID!\n    nickname: String\n}"));
//! ```
//!
//! ## Example (CLI)
//!
//! ```bash
//! avsc2graphql user.avsc user.graphql
//! ```
//!
//! Omit the output path to print to stdout.
//!
//! ## Crate Layout
//!
//! - [`avro`] — Classification of Avro schema nodes
//! - [`graphql`] — SDL vocabulary and declaration rendering
//! - [`converter`] — Type mapping, declaration registry and file conversion
//! - [`error`] — Error types
//!
//! The CLI binary is enabled with the `cli` feature.
pub mod avro;
pub mod converter;
pub mod error;
pub mod graphql;

pub use converter::{avsc_to_graphql, convert_avsc_to_graphql};
pub use error::{ConvertError, SchemaError};
