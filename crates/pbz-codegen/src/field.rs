//! Rendering of a single record-schema field line.

use pbz_core::{FieldDescriptor, FieldKind};

use crate::config::GeneratorConfig;
use crate::mapping::validator_expression;
use crate::naming::sanitize_field_name;

const NULLABLE: &str = ".nullable()";
const OPTIONAL: &str = ".optional()";

/// Render `\t<key>: <expression>,` for one field.
///
/// Nullable and optional are independent markers. A non-required `json` field
/// gets both: its value may be an explicit `null` and its key may be absent.
/// Every other non-required field is only optional.
#[must_use]
pub fn render_field(
    collection_name: &str,
    field: &FieldDescriptor,
    config: &GeneratorConfig,
) -> String {
    let key = sanitize_field_name(&field.name);
    let mut expression = validator_expression(field, collection_name, config);

    if field.kind == FieldKind::Json && !field.required {
        expression.push_str(NULLABLE);
    }
    if !field.required {
        expression.push_str(OPTIONAL);
    }

    format!("\t{key}: {expression},")
}
