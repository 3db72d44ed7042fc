//! Collection types and field kinds.
//!
//! Both enums serialize as the lowercase tag PocketBase uses. Field kinds are
//! an open set on the wire, so [`FieldKind::Unknown`] carries any tag this
//! crate does not recognize and writes it back unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// CollectionType
// ---------------------------------------------------------------------------

/// Kind of a PocketBase collection.
///
/// Only `auth` changes generated output (it selects the authentication system
/// fields). Unrecognized tags are read as `base`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CollectionType {
    #[default]
    Base,
    Auth,
    View,
}

impl CollectionType {
    /// Parse a collection type tag. Unknown tags map to [`Self::Base`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "auth" => Self::Auth,
            "view" => Self::View,
            _ => Self::Base,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Auth => "auth",
            Self::View => "view",
        }
    }

    #[must_use]
    pub const fn is_auth(self) -> bool {
        matches!(self, Self::Auth)
    }
}

impl From<String> for CollectionType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<CollectionType> for String {
    fn from(kind: CollectionType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FieldKind
// ---------------------------------------------------------------------------

/// Kind of a collection field.
///
/// `user` is the pre-0.9 PocketBase relation-to-users kind and is still
/// accepted. Any other tag is preserved in [`Self::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Password,
    Number,
    Bool,
    Email,
    Url,
    Date,
    Autodate,
    Json,
    Select,
    File,
    Relation,
    User,
    Editor,
    Unknown(String),
}

impl FieldKind {
    /// Parse a field type tag. Matching is exact (PocketBase tags are lowercase).
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "password" => Self::Password,
            "number" => Self::Number,
            "bool" => Self::Bool,
            "email" => Self::Email,
            "url" => Self::Url,
            "date" => Self::Date,
            "autodate" => Self::Autodate,
            "json" => Self::Json,
            "select" => Self::Select,
            "file" => Self::File,
            "relation" => Self::Relation,
            "user" => Self::User,
            "editor" => Self::Editor,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The wire tag for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Email => "email",
            Self::Url => "url",
            Self::Date => "date",
            Self::Autodate => "autodate",
            Self::Json => "json",
            Self::Select => "select",
            Self::File => "file",
            Self::Relation => "relation",
            Self::User => "user",
            Self::Editor => "editor",
            Self::Unknown(tag) => tag,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl Default for FieldKind {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        match Self::from_tag(&tag) {
            Self::Unknown(_) => Self::Unknown(tag),
            known => known,
        }
    }
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("text", FieldKind::Text)]
    #[case("password", FieldKind::Password)]
    #[case("number", FieldKind::Number)]
    #[case("bool", FieldKind::Bool)]
    #[case("email", FieldKind::Email)]
    #[case("url", FieldKind::Url)]
    #[case("date", FieldKind::Date)]
    #[case("autodate", FieldKind::Autodate)]
    #[case("json", FieldKind::Json)]
    #[case("select", FieldKind::Select)]
    #[case("file", FieldKind::File)]
    #[case("relation", FieldKind::Relation)]
    #[case("user", FieldKind::User)]
    #[case("editor", FieldKind::Editor)]
    fn known_tags_roundtrip(#[case] tag: &str, #[case] expected: FieldKind) {
        let kind = FieldKind::from_tag(tag);
        assert_eq!(kind, expected);
        assert!(kind.is_known());
        assert_eq!(kind.as_str(), tag);
    }

    #[test]
    fn unknown_tag_is_preserved() {
        let kind = FieldKind::from("geopoint".to_string());
        assert_eq!(kind, FieldKind::Unknown("geopoint".into()));
        assert!(!kind.is_known());
        assert_eq!(String::from(kind), "geopoint");
    }

    #[test]
    fn tag_matching_is_case_sensitive() {
        assert_eq!(FieldKind::from_tag("Text"), FieldKind::Unknown("Text".into()));
    }

    #[test]
    fn field_kind_serde_uses_plain_tag() {
        let json = serde_json::to_string(&FieldKind::Relation).unwrap();
        assert_eq!(json, "\"relation\"");
        let parsed: FieldKind = serde_json::from_str("\"vector\"").unwrap();
        assert_eq!(parsed, FieldKind::Unknown("vector".into()));
    }

    #[test]
    fn collection_type_unknown_defaults_to_base() {
        let parsed: CollectionType = serde_json::from_str("\"something\"").unwrap();
        assert_eq!(parsed, CollectionType::Base);
        let auth: CollectionType = serde_json::from_str("\"auth\"").unwrap();
        assert!(auth.is_auth());
        assert_eq!(CollectionType::View.to_string(), "view");
    }
}
