use crate::avro::EnumSchema;
use crate::converter::state::Registry;
use crate::graphql::render_enum;

/// Declare an enum unless its name is already known.
///
/// A second enum with the same name reuses the first declaration; the
/// symbol lists are not compared.
pub fn declare_enum(schema: &EnumSchema<'_>, registry: &mut Registry) {
    registry.declare_once(schema.name, || render_enum(schema.name, &schema.symbols));
}
