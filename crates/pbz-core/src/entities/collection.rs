use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FieldDescriptor;
use crate::enums::CollectionType;
use crate::errors::CoreError;

/// A PocketBase collection as seen by the generator.
///
/// `name` and `fields` are lenient so that malformed entries survive parsing
/// and can be skipped by the generator instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: CollectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldDescriptor>>,
}

impl CollectionDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: CollectionType, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Some(fields),
        }
    }

    /// A collection is generated only when it has a name and a field list.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.name.is_empty() && self.fields.is_some()
    }

    /// Build a descriptor from a raw collection object.
    ///
    /// Accepts both the current `fields` key and the legacy `schema` key.
    /// A JSON `null` for either counts as absent.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSchema` if `raw` is not an object, or
    /// `CoreError::Json` if a known key has the wrong shape.
    pub fn from_value(raw: Value) -> Result<Self, CoreError> {
        let Value::Object(mut map) = raw else {
            return Err(CoreError::InvalidSchema(
                "collection entry is not a JSON object".into(),
            ));
        };

        let fields = match map.remove("fields") {
            Some(value) if !value.is_null() => Some(value),
            _ => map.remove("schema").filter(|value| !value.is_null()),
        };

        let name = match map.remove("name") {
            Some(Value::String(name)) => name,
            _ => String::new(),
        };
        let kind = match map.remove("type") {
            Some(Value::String(tag)) => CollectionType::from_tag(&tag),
            _ => CollectionType::Base,
        };
        let fields = fields
            .map(serde_json::from_value::<Vec<FieldDescriptor>>)
            .transpose()?;

        Ok(Self { name, kind, fields })
    }

    /// Parse a JSON array of raw collection objects.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSchema` if the document is not an array, and
    /// propagates per-entry errors from [`Self::from_value`].
    pub fn list_from_value(raw: Value) -> Result<Vec<Self>, CoreError> {
        let Value::Array(entries) = raw else {
            return Err(CoreError::InvalidSchema(
                "expected a JSON array of collections".into(),
            ));
        };
        entries.into_iter().map(Self::from_value).collect()
    }
}
