//! Collections exported from the admin UI as a JSON array.

use std::path::Path;

use pbz_core::CollectionDescriptor;
use serde_json::{Map, Value};

use crate::error::FetchError;

/// Parse an admin-UI export. Accepts the `fields` and legacy `schema` keys.
///
/// # Errors
///
/// Returns [`FetchError::MissingFile`] for a missing path,
/// [`FetchError::Json`] for invalid JSON, and [`FetchError::Core`] when the
/// document is not an array of collection objects.
pub async fn read_collections(path: &Path) -> Result<Vec<CollectionDescriptor>, FetchError> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Err(FetchError::MissingFile(path.to_path_buf()));
        }
        Err(error) => return Err(error.into()),
    };
    parse_collections(&text)
}

/// Parse export text that is already in memory.
///
/// # Errors
///
/// See [`read_collections`].
pub fn parse_collections(text: &str) -> Result<Vec<CollectionDescriptor>, FetchError> {
    let raw = match serde_json::from_str::<Value>(text)? {
        Value::Array(entries) => Value::Array(entries.into_iter().map(with_field_list).collect()),
        other => other,
    };
    Ok(CollectionDescriptor::list_from_value(raw)?)
}

/// A collection object without any field list is treated as having none.
pub(crate) fn with_field_list(entry: Value) -> Value {
    match entry {
        Value::Object(mut map) => {
            if !has_field_list(&map) {
                map.insert("fields".into(), Value::Array(Vec::new()));
            }
            Value::Object(map)
        }
        other => other,
    }
}

fn has_field_list(map: &Map<String, Value>) -> bool {
    ["fields", "schema"]
        .iter()
        .any(|key| map.get(*key).is_some_and(|value| !value.is_null()))
}
