//! Comment moderation: list configuration and the [`ListEntity`] wiring.
//! Comments are authored on the public site, so the list has no create
//! action; the form only moderates content and visibility.

pub mod form;
pub mod list;

use std::cmp::Ordering;

use contracts::domain::comment::Comment;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_engine::{
    ColumnSpec, FieldKind, FieldSpec, FilterValue, ListConfig, ListEntity, SortKeyCode,
};

const TARGET_OPTIONS: &[(&str, &str)] = &[
    ("blog", "Blog post"),
    ("forum", "Forum thread"),
    ("event", "Event"),
];

fn excerpt(text: &str) -> String {
    let trimmed = text.trim();
    let mut out: String = trimmed.chars().take(80).collect();
    if trimmed.chars().count() > 80 {
        out.push('…');
    }
    out
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CommentSort {
    Author,
    CreatedAt,
}

impl SortKeyCode for CommentSort {
    fn as_code(&self) -> &'static str {
        match self {
            CommentSort::Author => "author",
            CommentSort::CreatedAt => "createdAt",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "author" => Some(CommentSort::Author),
            "createdAt" => Some(CommentSort::CreatedAt),
            _ => None,
        }
    }
}

impl ListEntity for Comment {
    type SortKey = CommentSort;
    const ENTITY: &'static str = "comments";

    fn id(&self) -> &str {
        &self.id
    }

    fn quick_fields(&self) -> Vec<String> {
        vec![
            self.author.clone(),
            self.content.clone(),
            format_datetime(&self.created_at),
        ]
    }

    fn field_matches(&self, key: &str, filter: &FilterValue) -> bool {
        match key {
            "author" => filter.matches_text(&self.author),
            "content" => filter.matches_text(&self.content),
            "targetKind" => filter.matches_text(self.target_kind.as_str()),
            "visible" => filter.matches_flag(self.visible),
            _ => true,
        }
    }

    fn compare(&self, other: &Self, key: CommentSort) -> Ordering {
        match key {
            CommentSort::Author => self.author.to_lowercase().cmp(&other.author.to_lowercase()),
            CommentSort::CreatedAt => other.created_at.cmp(&self.created_at),
        }
    }
}

pub fn list_config() -> ListConfig<Comment> {
    ListConfig {
        title: "Comments",
        columns: vec![
            ColumnSpec {
                title: "Author",
                sort: Some(CommentSort::Author),
                render: |comment| comment.author.clone(),
            },
            ColumnSpec {
                title: "Comment",
                sort: None,
                render: |comment| excerpt(&comment.content),
            },
            ColumnSpec {
                title: "On",
                sort: None,
                render: |comment| comment.target_kind.as_str().to_string(),
            },
            ColumnSpec {
                title: "Visible",
                sort: None,
                render: |comment| if comment.visible { "Yes" } else { "Hidden" }.to_string(),
            },
            ColumnSpec {
                title: "Created",
                sort: Some(CommentSort::CreatedAt),
                render: |comment| format_datetime(&comment.created_at),
            },
        ],
        fields: vec![
            FieldSpec {
                key: "author",
                label: "Author",
                kind: FieldKind::Text,
            },
            FieldSpec {
                key: "content",
                label: "Content",
                kind: FieldKind::Text,
            },
            FieldSpec {
                key: "targetKind",
                label: "Commented on",
                kind: FieldKind::Choice(TARGET_OPTIONS),
            },
            FieldSpec {
                key: "visible",
                label: "Visible",
                kind: FieldKind::Flag,
            },
        ],
        facet_options: None,
        row_label: |comment| format!("comment by {}", comment.author),
        edit_route: |comment| format!("/admin/comments/{}", comment.id),
        create_route: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_truncates_long_content() {
        let long = "x".repeat(120);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), 81);
        assert!(cut.ends_with('…'));
        assert_eq!(excerpt("short"), "short");
    }
}
