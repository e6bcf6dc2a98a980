use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in an entity's revision history.
///
/// The snapshot stays an opaque JSON value; diff rendering is handled
/// elsewhere and is not a concern of this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    pub id: String,
    pub entity_id: String,
    pub editor: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub snapshot: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
