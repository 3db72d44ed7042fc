//! Response handling shared by every PocketBase request.

use crate::error::FetchError;

/// Pass successful responses through; turn anything else into
/// [`FetchError::Api`].
///
/// PocketBase reports failures as a JSON body with a `message` key. The body
/// is kept verbatim so auth and permission errors stay readable.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), %message, "PocketBase request failed");
    Err(FetchError::Api {
        status: status.as_u16(),
        message,
    })
}
