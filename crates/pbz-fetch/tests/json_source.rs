//! Loading admin-UI exports from disk.

use std::io::Write;

use pbz_core::FieldKind;
use pbz_fetch::{FetchError, SchemaSource};
use pretty_assertions::assert_eq;

const EXPORT: &str = r#"[
  {
    "id": "_pb_users_auth_",
    "name": "users",
    "type": "auth",
    "system": false,
    "fields": [
      { "id": "text1", "name": "name", "type": "text", "required": false },
      { "id": "file1", "name": "avatar", "type": "file", "maxSelect": 1 }
    ]
  },
  {
    "id": "abc",
    "name": "posts",
    "type": "base",
    "schema": [
      { "name": "tags", "type": "select", "options": { "values": ["a", "b"], "maxSelect": 2 } }
    ]
  }
]"#;

#[tokio::test]
async fn reads_export_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(EXPORT.as_bytes()).unwrap();

    let collections = SchemaSource::Json(file.path().to_path_buf())
        .fetch()
        .await
        .unwrap();

    assert_eq!(collections.len(), 2);
    assert_eq!(collections[0].name, "users");
    let tags = &collections[1].fields.as_ref().unwrap()[0];
    assert_eq!(tags.kind, FieldKind::Select);
    assert!(tags.is_multi());
    assert_eq!(tags.option_values(), ["a", "b"]);
}

#[tokio::test]
async fn non_array_export_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"items": []}"#).unwrap();

    let err = SchemaSource::Json(file.path().to_path_buf())
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Core(_)));
}
