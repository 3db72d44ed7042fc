use serde::{Deserialize, Serialize};

use crate::enums::FieldKind;

/// Legacy nested field options (PocketBase < 0.23 stored these under `options`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_select: Option<u32>,
}

/// One field of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    /// Enumeration members of a `select` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    /// Cardinality cap. Absent or 1 means single-valued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_select: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<FieldOptions>,
}

impl FieldDescriptor {
    /// Create an optional field of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<FieldKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub const fn with_max_select(mut self, max_select: u32) -> Self {
        self.max_select = Some(max_select);
        self
    }

    /// Select members, read from `values` or, when that is absent or empty,
    /// from the legacy `options.values`.
    #[must_use]
    pub fn option_values(&self) -> &[String] {
        match &self.values {
            Some(values) if !values.is_empty() => values,
            _ => self
                .options
                .as_ref()
                .and_then(|o| o.values.as_deref())
                .unwrap_or_default(),
        }
    }

    /// Effective cardinality cap. A direct value of 0 counts as unset and
    /// falls through to the legacy `options.maxSelect`.
    #[must_use]
    pub fn max_select(&self) -> Option<u32> {
        self.max_select
            .filter(|n| *n != 0)
            .or_else(|| self.options.as_ref().and_then(|o| o.max_select))
    }

    /// True when the field allows more than one value.
    #[must_use]
    pub fn is_multi(&self) -> bool {
        self.max_select().is_some_and(|n| n > 1)
    }
}
