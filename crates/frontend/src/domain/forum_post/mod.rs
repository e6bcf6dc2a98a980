//! Forum threads: list configuration and the [`ListEntity`] wiring.

pub mod form;
pub mod list;

use std::cmp::Ordering;

use contracts::domain::forum::ForumPost;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_engine::view::distinct_values;
use crate::shared::list_engine::{
    ColumnSpec, FieldKind, FieldSpec, FilterValue, ListConfig, ListEntity, SortKeyCode,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ForumPostSort {
    Title,
    Author,
    CreatedAt,
    UpdatedAt,
}

impl SortKeyCode for ForumPostSort {
    fn as_code(&self) -> &'static str {
        match self {
            ForumPostSort::Title => "title",
            ForumPostSort::Author => "author",
            ForumPostSort::CreatedAt => "createdAt",
            ForumPostSort::UpdatedAt => "updatedAt",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "title" => Some(ForumPostSort::Title),
            "author" => Some(ForumPostSort::Author),
            "createdAt" => Some(ForumPostSort::CreatedAt),
            "updatedAt" => Some(ForumPostSort::UpdatedAt),
            _ => None,
        }
    }
}

impl ListEntity for ForumPost {
    type SortKey = ForumPostSort;
    const ENTITY: &'static str = "forum";

    fn id(&self) -> &str {
        &self.id
    }

    fn quick_fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.author.clone(),
            self.category_name.clone(),
            format_datetime(&self.created_at),
        ]
    }

    fn field_matches(&self, key: &str, filter: &FilterValue) -> bool {
        match key {
            "title" => filter.matches_text(&self.title),
            "author" => filter.matches_text(&self.author),
            "category" => filter.matches_any(std::slice::from_ref(&self.category_name)),
            "pinned" => filter.matches_flag(self.pinned),
            "locked" => filter.matches_flag(self.locked),
            _ => true,
        }
    }

    fn compare(&self, other: &Self, key: ForumPostSort) -> Ordering {
        match key {
            ForumPostSort::Title => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            ForumPostSort::Author => {
                self.author.to_lowercase().cmp(&other.author.to_lowercase())
            }
            ForumPostSort::CreatedAt => other.created_at.cmp(&self.created_at),
            ForumPostSort::UpdatedAt => other.updated_at.cmp(&self.updated_at),
        }
    }
}

pub fn list_config() -> ListConfig<ForumPost> {
    ListConfig {
        title: "Forum threads",
        columns: vec![
            ColumnSpec {
                title: "Title",
                sort: Some(ForumPostSort::Title),
                render: |post| post.title.clone(),
            },
            ColumnSpec {
                title: "Author",
                sort: Some(ForumPostSort::Author),
                render: |post| post.author.clone(),
            },
            ColumnSpec {
                title: "Category",
                sort: None,
                render: |post| post.category_name.clone(),
            },
            ColumnSpec {
                title: "Flags",
                sort: None,
                render: |post| {
                    let mut flags = Vec::new();
                    if post.pinned {
                        flags.push("pinned");
                    }
                    if post.locked {
                        flags.push("locked");
                    }
                    flags.join(", ")
                },
            },
            ColumnSpec {
                title: "Created",
                sort: Some(ForumPostSort::CreatedAt),
                render: |post| format_datetime(&post.created_at),
            },
        ],
        fields: vec![
            FieldSpec {
                key: "title",
                label: "Title",
                kind: FieldKind::Text,
            },
            FieldSpec {
                key: "author",
                label: "Author",
                kind: FieldKind::Text,
            },
            FieldSpec {
                key: "category",
                label: "Category",
                kind: FieldKind::Multi,
            },
            FieldSpec {
                key: "pinned",
                label: "Pinned",
                kind: FieldKind::Flag,
            },
            FieldSpec {
                key: "locked",
                label: "Locked",
                kind: FieldKind::Flag,
            },
        ],
        facet_options: Some(|items, key| match key {
            "category" => distinct_values(items, |post| vec![post.category_name.clone()]),
            _ => Vec::new(),
        }),
        row_label: |post| post.title.clone(),
        edit_route: |post| format!("/admin/forum/{}", post.id),
        create_route: Some("/admin/forum/new"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn thread(title: &str, pinned: bool, locked: bool) -> ForumPost {
        ForumPost {
            id: "f1".into(),
            title: title.into(),
            author: "member".into(),
            category_id: "c1".into(),
            category_name: "General".into(),
            pinned,
            locked,
            content: String::new(),
            created_at: Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn lock_filter_is_tri_state() {
        let open = thread("a", false, false);
        let locked = thread("b", false, true);
        let filter = FilterValue::Exact("true".into());
        assert!(!open.field_matches("locked", &filter));
        assert!(locked.field_matches("locked", &filter));
        // empty value is treated as inactive upstream
        assert!(FilterValue::Exact(String::new()).is_empty());
    }

    #[test]
    fn category_facet_matches_by_name() {
        let t = thread("a", false, false);
        assert!(t.field_matches("category", &FilterValue::AnyOf(vec!["General".into()])));
        assert!(!t.field_matches("category", &FilterValue::AnyOf(vec!["Random".into()])));
    }
}
