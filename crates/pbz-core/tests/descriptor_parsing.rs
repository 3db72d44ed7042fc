//! Parsing of real PocketBase collection exports into descriptors.

use pbz_core::{CollectionDescriptor, CollectionType, FieldKind};

const CURRENT_EXPORT: &str = r#"[
  {
    "id": "_pb_users_auth_",
    "listRule": "id = @request.auth.id",
    "name": "users",
    "type": "auth",
    "system": false,
    "fields": [
      { "id": "text3208210256", "name": "id", "type": "text", "required": true, "system": true, "primaryKey": true },
      { "id": "f1", "name": "role", "type": "select", "required": false, "maxSelect": 1, "values": ["admin", "editor", "viewer"] },
      { "id": "f2", "name": "location", "type": "geoPoint", "required": false }
    ],
    "indexes": []
  },
  {
    "id": "pbc_1",
    "name": "posts_view",
    "type": "view",
    "fields": []
  }
]"#;

const LEGACY_EXPORT: &str = r#"[
  {
    "id": "abc",
    "name": "posts",
    "type": "base",
    "schema": [
      { "id": "x1", "name": "title", "type": "text", "required": true, "options": { "min": null, "max": null, "pattern": "" } },
      { "id": "x2", "name": "author", "type": "relation", "required": false, "options": { "collectionId": "_pb_users_auth_", "maxSelect": 1 } },
      { "id": "x3", "name": "status", "type": "select", "required": false, "options": { "maxSelect": 1, "values": ["draft", "published"] } }
    ]
  }
]"#;

#[test]
fn current_export_parses() {
    let raw: serde_json::Value = serde_json::from_str(CURRENT_EXPORT).unwrap();
    let collections = CollectionDescriptor::list_from_value(raw).unwrap();

    assert_eq!(collections.len(), 2);
    assert_eq!(collections[0].kind, CollectionType::Auth);
    assert_eq!(collections[1].kind, CollectionType::View);

    let fields = collections[0].fields.as_ref().unwrap();
    assert_eq!(fields[1].option_values().len(), 3);
    assert_eq!(fields[2].kind, FieldKind::Unknown("geoPoint".into()));
}

#[test]
fn legacy_export_parses_nested_options() {
    let raw: serde_json::Value = serde_json::from_str(LEGACY_EXPORT).unwrap();
    let collections = CollectionDescriptor::list_from_value(raw).unwrap();

    let fields = collections[0].fields.as_ref().unwrap();
    assert!(fields[0].required);
    assert_eq!(fields[1].max_select(), Some(1));
    assert_eq!(
        fields[2].option_values(),
        ["draft".to_string(), "published".to_string()]
    );
}
