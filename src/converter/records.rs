use crate::avro::RecordSchema;
use crate::converter::state::Registry;
use crate::converter::types::graphql_type;
use crate::error::SchemaError;
use crate::graphql::render_record;

/// Render a record into a `type` declaration and register it.
///
/// The record name resolves while its fields are being converted, so a field
/// may refer back to the enclosing record by name. A record declared twice
/// under the same name keeps the last rendering, in the slot of the first.
pub fn declare_record(
    record: &RecordSchema<'_>,
    registry: &mut Registry,
) -> Result<(), SchemaError> {
    registry.reserve(record.name);

    let mut fields = Vec::with_capacity(record.fields.len());
    for field in &record.fields {
        fields.push((field.name, graphql_type(field.field_type, registry)?));
    }

    registry.declare(
        record.name,
        render_record(record.name, record.key_field(), &fields),
    );
    Ok(())
}
