use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Visibility;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub show_at_home: bool,
    #[serde(default)]
    pub summary: String,
    /// Markdown source; editing widgets live outside this repo.
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for POST /api/blog and PUT /api/blog/{id}.
/// Optional fields are omitted when empty so the backend keeps defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostBody {
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    pub visibility: Visibility,
    pub pinned: bool,
    pub show_at_home: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_json() {
        let json = r##"{
            "id": "abc123",
            "title": "Welcome",
            "author": "board",
            "tags": ["news", "intro"],
            "visibility": "public",
            "pinned": true,
            "showAtHome": true,
            "summary": "Hello",
            "content": "# Hi",
            "createdAt": "2025-09-01T10:00:00Z",
            "updatedAt": "2025-09-02T11:30:00Z"
        }"##;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "abc123");
        assert!(post.show_at_home);
        assert_eq!(post.visibility, Visibility::Public);
    }

    #[test]
    fn empty_optionals_are_omitted_from_body() {
        let body = BlogPostBody {
            title: "T".into(),
            author: "A".into(),
            content: "C".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("summary"));
        assert!(!json.contains("tags"));
    }
}
