//! Remote PocketBase instance settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Base URL of the PocketBase instance (e.g. `https://pb.example.com`).
    #[serde(default)]
    pub url: String,

    /// Admin auth token. Takes precedence over email/password.
    #[serde(default)]
    pub token: String,

    /// Admin email for password authentication.
    #[serde(default)]
    pub email: String,

    /// Admin password for password authentication.
    #[serde(default)]
    pub password: String,
}

impl RemoteConfig {
    /// A URL is the minimum for any remote source.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn has_password(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}
