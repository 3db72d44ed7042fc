//! PocketBase HTTP API client.
//!
//! The collection list endpoint only carries summaries on some server
//! versions, so every listed collection is re-fetched from its detail
//! endpoint. Detail requests run concurrently; a failed detail request
//! degrades to the summary entry instead of failing the whole fetch.

use std::time::Duration;

use pbz_core::CollectionDescriptor;
use serde::Deserialize;
use serde_json::Value;
use tokio::task::JoinSet;

use crate::error::FetchError;
use crate::http::check_response;
use crate::json::with_field_list;

/// Largest page size the collections endpoint accepts.
pub const PAGE_SIZE: u32 = 200;

const ADMIN_AUTH_PATH: &str = "/api/admins/auth-with-password";
const SUPERUSER_AUTH_PATH: &str = "/api/collections/_superusers/auth-with-password";

#[derive(Deserialize)]
struct CollectionPage {
    #[serde(default)]
    items: Vec<Value>,
    #[serde(rename = "totalPages", default)]
    total_pages: u32,
}

#[derive(Deserialize)]
struct AuthResponse {
    #[serde(default)]
    token: String,
}

/// HTTP client bound to one PocketBase instance.
#[derive(Debug, Clone)]
pub struct PocketBaseClient {
    http: reqwest::Client,
    base_url: String,
}

impl PocketBaseClient {
    /// Create a client for the instance at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pocketbase-zod/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange admin credentials for an auth token.
    ///
    /// Tries the legacy admin endpoint first and falls back to the
    /// `_superusers` collection endpoint when the server does not know it.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Auth`] if the credentials are rejected or the
    /// response carries no token.
    pub async fn authenticate_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<String, FetchError> {
        match self.auth_request(ADMIN_AUTH_PATH, email, password).await {
            Err(FetchError::Api { status: 404, .. }) => {
                tracing::debug!("admin auth endpoint missing; trying _superusers");
                self.auth_request(SUPERUSER_AUTH_PATH, email, password)
                    .await
                    .map_err(auth_error)
            }
            other => other.map_err(auth_error),
        }
    }

    async fn auth_request(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<String, FetchError> {
        let url = format!("{}{path}", self.base_url);
        let body = serde_json::json!({ "identity": email, "password": password });
        let resp = check_response(self.http.post(&url).json(&body).send().await?).await?;

        let auth: AuthResponse = resp.json().await?;
        if auth.token.is_empty() {
            return Err(FetchError::Auth("response did not include a token".into()));
        }
        Ok(auth.token)
    }

    /// Fetch every collection, with full field lists where available.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if listing fails. Per-collection detail
    /// failures are logged and do not fail the call.
    pub async fn list_collections(
        &self,
        token: &str,
    ) -> Result<Vec<CollectionDescriptor>, FetchError> {
        let summaries = self.list_summaries(token).await?;
        tracing::debug!(count = summaries.len(), "listed collections");

        let details = self.fetch_details(token, &summaries).await;
        summaries
            .into_iter()
            .zip(details)
            .map(|(summary, detail)| {
                CollectionDescriptor::from_value(detail.unwrap_or(summary)).map_err(FetchError::from)
            })
            .collect()
    }

    async fn list_summaries(&self, token: &str) -> Result<Vec<Value>, FetchError> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let url = format!(
                "{}/api/collections?page={page}&perPage={PAGE_SIZE}",
                self.base_url
            );
            let data: CollectionPage = get_json(&self.http, &url, token).await?;
            items.extend(data.items);
            if page >= data.total_pages {
                break;
            }
            page += 1;
        }
        Ok(items)
    }

    /// Fetch detail documents concurrently, returned in `summaries` order.
    async fn fetch_details(&self, token: &str, summaries: &[Value]) -> Vec<Option<Value>> {
        let mut set = JoinSet::new();
        for (index, summary) in summaries.iter().enumerate() {
            let Some(name) = summary.get("name").and_then(Value::as_str) else {
                continue;
            };
            let http = self.http.clone();
            let url = format!(
                "{}/api/collections/{}",
                self.base_url,
                urlencoding::encode(name)
            );
            let token = token.to_string();
            let name = name.to_string();
            set.spawn(async move {
                let detail = get_json::<Value>(&http, &url, &token).await;
                (index, name, detail)
            });
        }

        let mut details = vec![None; summaries.len()];
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, _, Ok(detail))) => details[index] = Some(with_field_list(detail)),
                Ok((_, name, Err(error))) => {
                    tracing::warn!(
                        collection = %name,
                        %error,
                        "failed to fetch collection details; using list entry"
                    );
                }
                Err(error) => tracing::warn!(%error, "collection detail task failed"),
            }
        }
        details
    }
}

fn auth_error(error: FetchError) -> FetchError {
    match error {
        FetchError::Api { status, message } => FetchError::Auth(format!("{status}: {message}")),
        other => other,
    }
}

async fn get_json<T: serde::de::DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
    token: &str,
) -> Result<T, FetchError> {
    let resp = check_response(
        http.get(url)
            .header(reqwest::header::AUTHORIZATION, token)
            .send()
            .await?,
    )
    .await?;
    Ok(resp.json().await?)
}
