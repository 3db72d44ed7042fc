//! Reading collections straight from a PocketBase SQLite database.

use std::path::Path;

use libsql::Builder;
use pbz_core::{CollectionDescriptor, CoreError};
use serde_json::{Value, json};

use crate::error::FetchError;

/// Which columns the `_collections` table of this database has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CollectionColumns {
    /// `fields` on current servers, `schema` on older ones.
    fields: &'static str,
    has_type: bool,
}

impl CollectionColumns {
    fn detect(columns: &[String]) -> Option<Self> {
        let has = |name: &str| columns.iter().any(|c| c.eq_ignore_ascii_case(name));
        let fields = if has("fields") {
            "fields"
        } else if has("schema") {
            "schema"
        } else {
            return None;
        };
        Some(Self {
            fields,
            has_type: has("type"),
        })
    }

    fn select(self) -> String {
        let kind = if self.has_type { "type" } else { "'base'" };
        format!("SELECT name, {kind}, {} FROM _collections", self.fields)
    }
}

/// Load every row of `_collections` from the database at `path`.
///
/// The file is never created: a missing path is an error rather than an
/// empty database.
///
/// # Errors
///
/// Returns [`FetchError::MissingFile`] if `path` does not exist,
/// [`FetchError::Database`] on query failures, and [`FetchError::Core`] if
/// the table lacks a field column or a row holds malformed field JSON.
pub async fn read_collections(path: &Path) -> Result<Vec<CollectionDescriptor>, FetchError> {
    if !path.is_file() {
        return Err(FetchError::MissingFile(path.to_path_buf()));
    }

    let db = Builder::new_local(path).build().await?;
    let conn = db.connect()?;

    let mut names = Vec::new();
    let mut rows = conn
        .query("SELECT name FROM pragma_table_info('_collections')", ())
        .await?;
    while let Some(row) = rows.next().await? {
        names.push(row.get::<String>(0)?);
    }

    let columns = CollectionColumns::detect(&names).ok_or_else(|| {
        CoreError::InvalidSchema(
            "_collections table has neither a `fields` nor a `schema` column".into(),
        )
    })?;
    tracing::debug!(?columns, "reading _collections");

    let mut collections = Vec::new();
    let mut rows = conn.query(&columns.select(), ()).await?;
    while let Some(row) = rows.next().await? {
        let name = row.get::<Option<String>>(0)?.unwrap_or_default();
        let kind = row.get::<Option<String>>(1)?.unwrap_or_default();
        let fields = match row.get::<Option<String>>(2)? {
            Some(text) if !text.trim().is_empty() => serde_json::from_str::<Value>(&text)?,
            _ => Value::Null,
        };
        collections.push(CollectionDescriptor::from_value(json!({
            "name": name,
            "type": kind,
            "fields": fields,
        }))?);
    }
    Ok(collections)
}
