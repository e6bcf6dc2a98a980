use contracts::shared::Envelope;
use contracts::system::auth::AuthStatus;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// GET /api/auth. A 200 means the session may use the admin area;
/// any other status (or a network error) means it may not.
pub async fn check_auth() -> Result<AuthStatus, String> {
    let response = Request::get(&format!("{}/api/auth", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Envelope<AuthStatus>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_result()
}
