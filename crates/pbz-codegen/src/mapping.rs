//! Field kind to validator expression mapping.

use pbz_core::{FieldDescriptor, FieldKind};

use crate::config::GeneratorConfig;
use crate::naming::option_enum_name;

const Z_STRING: &str = "z.string()";
const Z_NUMBER: &str = "z.number()";
const Z_BOOLEAN: &str = "z.boolean()";
const Z_ANY: &str = "z.any()";

fn array_of(inner: &str) -> String {
    format!("z.array({inner})")
}

/// Build the bare validator expression for one field, without optional or
/// nullable markers.
///
/// Unknown field kinds log a warning and fall back to `z.any()`; generation
/// never stops on a field it cannot map.
#[must_use]
pub fn validator_expression(
    field: &FieldDescriptor,
    collection_name: &str,
    config: &GeneratorConfig,
) -> String {
    match &field.kind {
        FieldKind::Text | FieldKind::Password => Z_STRING.to_string(),
        FieldKind::Number => Z_NUMBER.to_string(),
        FieldKind::Bool => Z_BOOLEAN.to_string(),
        FieldKind::Email => "z.string().email()".to_string(),
        FieldKind::Url => "z.string().url()".to_string(),
        FieldKind::Date | FieldKind::Autodate => config.iso_date_alias.clone(),
        FieldKind::Json => Z_ANY.to_string(),
        FieldKind::Select => {
            let base = format!("z.enum({})", option_enum_name(collection_name, &field.name));
            if field.is_multi() { array_of(&base) } else { base }
        }
        FieldKind::File => {
            if field.is_multi() {
                array_of(Z_STRING)
            } else {
                Z_STRING.to_string()
            }
        }
        // Only an explicit cap of exactly one is scalar.
        FieldKind::Relation | FieldKind::User => {
            if field.max_select() == Some(1) {
                config.record_id_alias.clone()
            } else {
                array_of(&config.record_id_alias)
            }
        }
        FieldKind::Editor => config.html_alias.clone(),
        FieldKind::Unknown(tag) => {
            tracing::warn!(
                collection = collection_name,
                field = %field.name,
                field_type = %tag,
                "unknown field type found in schema; falling back to z.any()"
            );
            Z_ANY.to_string()
        }
    }
}
