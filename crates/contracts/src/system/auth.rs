use serde::{Deserialize, Serialize};

/// Payload of GET /api/auth. A 200 on that endpoint is the sole
/// authorization gate consumed before rendering any admin page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}
