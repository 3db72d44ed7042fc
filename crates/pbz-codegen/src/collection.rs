//! Per-collection schema block.
//!
//! A block holds, separated by blank lines:
//! 1. one `as const` array per select field that has members
//! 2. the record schema
//! 3. the response schema (record schema merged with system fields)
//! 4. the record and response type aliases

use std::collections::HashSet;

use pbz_core::{CollectionDescriptor, FieldDescriptor, FieldKind};

use crate::config::GeneratorConfig;
use crate::field::render_field;
use crate::naming::{option_enum_name, to_identifier};

/// Deduplicate select members, keeping the first occurrence of each.
fn unique_values(values: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(String::as_str)
        .filter(|value| seen.insert(*value))
        .collect()
}

/// Render the option constants for every select field with members.
///
/// Returns an empty string when the collection has none.
#[must_use]
pub fn select_option_constants(collection_name: &str, fields: &[FieldDescriptor]) -> String {
    fields
        .iter()
        .filter(|field| field.kind == FieldKind::Select && !field.option_values().is_empty())
        .map(|field| {
            let values = unique_values(field.option_values());
            // Serializing a Vec<&str> cannot fail.
            let literal = serde_json::to_string(&values).unwrap_or_default();
            format!(
                "export const {} = {literal} as const;",
                option_enum_name(collection_name, &field.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn warn_duplicate_fields(collection_name: &str, fields: &[FieldDescriptor]) {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            tracing::warn!(
                collection = collection_name,
                field = %field.name,
                "duplicate field name; the generated object literal will repeat the key"
            );
        }
    }
}

/// Render the full block for one collection.
///
/// Returns `None` for a collection without a name or field list.
#[must_use]
pub fn render_collection(
    collection: &CollectionDescriptor,
    config: &GeneratorConfig,
) -> Option<String> {
    if !collection.is_well_formed() {
        return None;
    }
    let name = collection.name.as_str();
    let fields = collection.fields.as_deref().unwrap_or_default();
    warn_duplicate_fields(name, fields);

    let pascal = to_identifier(name);
    let select_options = select_option_constants(name, fields);

    // Sorted as rendered text, not by declaration order.
    let mut lines: Vec<String> = fields
        .iter()
        .map(|field| render_field(name, field, config))
        .collect();
    lines.sort();
    let body = lines.join("\n");

    let record_schema = format!("{pascal}RecordSchema");
    let response_schema = format!("{pascal}ResponseSchema");
    let system_schema = config.system_fields_schema_for(collection.kind);

    let parts = [
        select_options,
        format!("export const {record_schema} = z.object({{\n{body}\n}});"),
        format!("export const {response_schema} = {record_schema}.merge({system_schema});"),
        format!("export type {pascal}Record = z.infer<typeof {record_schema}>;"),
        format!("export type {pascal}Response = z.infer<typeof {response_schema}>;"),
    ];

    Some(
        parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"),
    )
}
