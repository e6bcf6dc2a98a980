//! Generic REST client for the backend list/mutation endpoints.
//!
//! Every endpoint answers with the `{success, message, data, page, pages}`
//! envelope; failures resolve to `Err(message)` so callers can show the
//! backend's own wording in a notification and keep prior state untouched.

use contracts::shared::Envelope;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_base;

/// One backend-paginated page of entities.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
}

impl<T> Default for PageSlice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 0,
        }
    }
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    // The backend usually wraps errors in the envelope; fall back to the
    // bare status when the body is not parseable.
    match response.json::<Envelope<serde_json::Value>>().await {
        Ok(env) if !env.message.is_empty() => env.message,
        _ => format!("HTTP {}", status),
    }
}

/// Fetch one page: GET /api/{entity}?perPage=N&page=P
pub async fn fetch_page<T: DeserializeOwned>(
    entity: &str,
    per_page: usize,
    page: usize,
) -> Result<PageSlice<T>, String> {
    let url = format!(
        "{}/api/{}?perPage={}&page={}",
        api_base(),
        entity,
        per_page,
        page
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let envelope = response
        .json::<Envelope<Vec<T>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    let current_page = envelope.page.unwrap_or(page);
    let total_pages = envelope.pages.unwrap_or(0);
    let items = envelope.into_result()?;
    Ok(PageSlice {
        items,
        current_page,
        total_pages,
    })
}

/// Fetch the whole collection: GET /api/{entity} with no pagination params.
pub async fn fetch_index<T: DeserializeOwned>(entity: &str) -> Result<Vec<T>, String> {
    let response = Request::get(&format!("{}/api/{}", api_base(), entity))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<Envelope<Vec<T>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_result()
}

/// Fetch a single record: GET /api/{entity}/{id}
pub async fn fetch_one<T: DeserializeOwned>(entity: &str, id: &str) -> Result<T, String> {
    let url = format!("{}/api/{}/{}", api_base(), entity, urlencoding::encode(id));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<Envelope<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_result()
}

/// Fetch an entity's revision history: GET /api/{entity}/{id}/revisions
pub async fn fetch_revisions(
    entity: &str,
    id: &str,
) -> Result<Vec<contracts::domain::Revision>, String> {
    let url = format!(
        "{}/api/{}/{}/revisions",
        api_base(),
        entity,
        urlencoding::encode(id)
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<Envelope<Vec<contracts::domain::Revision>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_result()
}

async fn mutation_result(response: Response) -> Result<String, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    let envelope = response
        .json::<Envelope<serde_json::Value>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    if !envelope.success {
        return Err(if envelope.message.is_empty() {
            "Request failed".to_string()
        } else {
            envelope.message
        });
    }
    Ok(envelope.message)
}

/// Create a record: POST /api/{entity}. Returns the backend message.
pub async fn create_entity<B: Serialize>(entity: &str, body: &B) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/{}", api_base(), entity))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    mutation_result(response).await
}

/// Update a record: PUT /api/{entity}/{id}. Returns the backend message.
pub async fn update_entity<B: Serialize>(
    entity: &str,
    id: &str,
    body: &B,
) -> Result<String, String> {
    let url = format!("{}/api/{}/{}", api_base(), entity, urlencoding::encode(id));
    let response = Request::put(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    mutation_result(response).await
}

/// Delete a record: DELETE /api/{entity}/{id}. Returns the backend message.
pub async fn delete_entity(entity: &str, id: &str) -> Result<String, String> {
    let url = format!("{}/api/{}/{}", api_base(), entity, urlencoding::encode(id));
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    mutation_result(response).await
}
