use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a comment is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Blog,
    Forum,
    Event,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Blog => "blog",
            TargetKind::Forum => "forum",
            TargetKind::Event => "event",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "blog" => Some(TargetKind::Blog),
            "forum" => Some(TargetKind::Forum),
            "event" => Some(TargetKind::Event),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    pub target_kind: TargetKind,
    pub target_id: String,
    #[serde(default)]
    pub visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentBody {
    pub content: String,
    pub visible: bool,
}
