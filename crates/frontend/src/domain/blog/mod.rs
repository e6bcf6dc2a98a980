//! Blog posts: list configuration and the [`ListEntity`] wiring.

pub mod form;
pub mod list;

use std::cmp::Ordering;

use contracts::domain::blog::BlogPost;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_engine::view::distinct_values;
use crate::shared::list_engine::{
    ColumnSpec, FieldKind, FieldSpec, FilterValue, ListConfig, ListEntity, SortKeyCode,
};

use super::VISIBILITY_OPTIONS;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlogSort {
    Title,
    Author,
    CreatedAt,
    UpdatedAt,
}

impl SortKeyCode for BlogSort {
    fn as_code(&self) -> &'static str {
        match self {
            BlogSort::Title => "title",
            BlogSort::Author => "author",
            BlogSort::CreatedAt => "createdAt",
            BlogSort::UpdatedAt => "updatedAt",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "title" => Some(BlogSort::Title),
            "author" => Some(BlogSort::Author),
            "createdAt" => Some(BlogSort::CreatedAt),
            "updatedAt" => Some(BlogSort::UpdatedAt),
            _ => None,
        }
    }
}

impl ListEntity for BlogPost {
    type SortKey = BlogSort;
    const ENTITY: &'static str = "blog";

    fn id(&self) -> &str {
        &self.id
    }

    fn quick_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.title.clone(),
            self.author.clone(),
            self.summary.clone(),
            format_datetime(&self.created_at),
        ];
        fields.extend(self.tags.iter().cloned());
        fields
    }

    fn field_matches(&self, key: &str, filter: &FilterValue) -> bool {
        match key {
            "title" => filter.matches_text(&self.title),
            "author" => filter.matches_text(&self.author),
            "tags" => filter.matches_any(&self.tags),
            "visibility" => filter.matches_text(self.visibility.as_str()),
            "pinned" => filter.matches_flag(self.pinned),
            "showAtHome" => filter.matches_flag(self.show_at_home),
            _ => true,
        }
    }

    fn compare(&self, other: &Self, key: BlogSort) -> Ordering {
        match key {
            BlogSort::Title => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            BlogSort::Author => self.author.to_lowercase().cmp(&other.author.to_lowercase()),
            // chronological keys sort newest first
            BlogSort::CreatedAt => other.created_at.cmp(&self.created_at),
            BlogSort::UpdatedAt => other.updated_at.cmp(&self.updated_at),
        }
    }
}

pub fn list_config() -> ListConfig<BlogPost> {
    ListConfig {
        title: "Blog posts",
        columns: vec![
            ColumnSpec {
                title: "Title",
                sort: Some(BlogSort::Title),
                render: |post| post.title.clone(),
            },
            ColumnSpec {
                title: "Author",
                sort: Some(BlogSort::Author),
                render: |post| post.author.clone(),
            },
            ColumnSpec {
                title: "Tags",
                sort: None,
                render: |post| post.tags.join(", "),
            },
            ColumnSpec {
                title: "Visibility",
                sort: None,
                render: |post| post.visibility.label().to_string(),
            },
            ColumnSpec {
                title: "Pinned",
                sort: None,
                render: |post| if post.pinned { "Yes" } else { "" }.to_string(),
            },
            ColumnSpec {
                title: "Created",
                sort: Some(BlogSort::CreatedAt),
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
                key: "tags",
                label: "Tags",
                kind: FieldKind::Multi,
            },
            FieldSpec {
                key: "visibility",
                label: "Visibility",
                kind: FieldKind::Choice(VISIBILITY_OPTIONS),
            },
            FieldSpec {
                key: "pinned",
                label: "Pinned",
                kind: FieldKind::Flag,
            },
            FieldSpec {
                key: "showAtHome",
                label: "On home page",
                kind: FieldKind::Flag,
            },
        ],
        facet_options: Some(|items, key| match key {
            "tags" => distinct_values(items, |post| post.tags.clone()),
            _ => Vec::new(),
        }),
        row_label: |post| post.title.clone(),
        edit_route: |post| format!("/admin/blog/{}", post.id),
        create_route: Some("/admin/blog/new"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::common::Visibility;

    fn post(title: &str, tags: &[&str]) -> BlogPost {
        BlogPost {
            id: "p1".into(),
            title: title.into(),
            author: "board".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            visibility: Visibility::Public,
            pinned: false,
            show_at_home: false,
            summary: String::new(),
            content: String::new(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn sort_codes_round_trip() {
        for key in [
            BlogSort::Title,
            BlogSort::Author,
            BlogSort::CreatedAt,
            BlogSort::UpdatedAt,
        ] {
            assert_eq!(BlogSort::from_code(key.as_code()), Some(key));
        }
        assert_eq!(BlogSort::from_code("bogus"), None);
    }

    #[test]
    fn tag_filter_matches_any_selected() {
        let p = post("Welcome", &["news", "intro"]);
        let filter = FilterValue::AnyOf(vec!["intro".into()]);
        assert!(p.field_matches("tags", &filter));
        assert!(!p.field_matches("tags", &FilterValue::AnyOf(vec!["events".into()])));
    }

    #[test]
    fn unknown_field_key_matches_everything() {
        let p = post("Welcome", &[]);
        assert!(p.field_matches("noSuchKey", &FilterValue::Text("zzz".into())));
    }
}
