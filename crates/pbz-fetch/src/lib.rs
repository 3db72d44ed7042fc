//! # pbz-fetch
//!
//! Schema sources for pocketbase-zod. Each source yields the full list of
//! [`CollectionDescriptor`]s before generation starts:
//! - a PocketBase SQLite database (`pb_data/data.db`), read with libSQL
//! - a JSON export from the admin UI
//! - a running instance, authenticated with a token or admin credentials

pub mod database;
pub mod json;
pub mod remote;

mod error;
mod http;

pub use error::FetchError;
pub use remote::PocketBaseClient;

use std::fmt;
use std::path::PathBuf;

use pbz_core::CollectionDescriptor;

/// Where collection descriptors are loaded from.
#[derive(Clone, PartialEq, Eq)]
pub enum SchemaSource {
    Database(PathBuf),
    Json(PathBuf),
    RemoteToken {
        url: String,
        token: String,
    },
    RemotePassword {
        url: String,
        email: String,
        password: String,
    },
}

impl SchemaSource {
    /// Load every collection from this source.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the source cannot be read, authentication
    /// fails, or the document does not describe a list of collections.
    pub async fn fetch(&self) -> Result<Vec<CollectionDescriptor>, FetchError> {
        tracing::debug!(source = %self.describe(), "fetching schema");
        match self {
            Self::Database(path) => database::read_collections(path).await,
            Self::Json(path) => json::read_collections(path).await,
            Self::RemoteToken { url, token } => {
                PocketBaseClient::new(url)?.list_collections(token).await
            }
            Self::RemotePassword {
                url,
                email,
                password,
            } => {
                let client = PocketBaseClient::new(url)?;
                let token = client.authenticate_with_password(email, password).await?;
                client.list_collections(&token).await
            }
        }
    }

    /// Human-readable label used in the provenance header.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Database(path) => format!("local database: {}", path.display()),
            Self::Json(path) => format!("local JSON file: {}", path.display()),
            Self::RemoteToken { url, .. } | Self::RemotePassword { url, .. } => url.clone(),
        }
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteToken { .. } | Self::RemotePassword { .. })
    }
}

// Credentials stay out of logs.
impl fmt::Debug for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Database(path) => f.debug_tuple("Database").field(path).finish(),
            Self::Json(path) => f.debug_tuple("Json").field(path).finish(),
            Self::RemoteToken { url, .. } => f
                .debug_struct("RemoteToken")
                .field("url", url)
                .field("token", &"<redacted>")
                .finish(),
            Self::RemotePassword { url, email, .. } => f
                .debug_struct("RemotePassword")
                .field("url", url)
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}
