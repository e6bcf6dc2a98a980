//! Shortlinks: list configuration and the [`ListEntity`] wiring.

pub mod form;
pub mod list;

use std::cmp::Ordering;

use contracts::domain::shortlink::Shortlink;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_engine::{
    ColumnSpec, FieldKind, FieldSpec, FilterValue, ListConfig, ListEntity, SortKeyCode,
};

/// Slugs are the public path segment, so keep them URL-safe.
pub fn valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub fn valid_target(url: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShortlinkSort {
    Slug,
    Clicks,
    CreatedAt,
}

impl SortKeyCode for ShortlinkSort {
    fn as_code(&self) -> &'static str {
        match self {
            ShortlinkSort::Slug => "slug",
            ShortlinkSort::Clicks => "clicks",
            ShortlinkSort::CreatedAt => "createdAt",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "slug" => Some(ShortlinkSort::Slug),
            "clicks" => Some(ShortlinkSort::Clicks),
            "createdAt" => Some(ShortlinkSort::CreatedAt),
            _ => None,
        }
    }
}

impl ListEntity for Shortlink {
    type SortKey = ShortlinkSort;
    const ENTITY: &'static str = "shortlinks";

    fn id(&self) -> &str {
        &self.id
    }

    fn quick_fields(&self) -> Vec<String> {
        vec![
            self.slug.clone(),
            self.target_url.clone(),
            self.description.clone(),
        ]
    }

    fn field_matches(&self, key: &str, filter: &FilterValue) -> bool {
        match key {
            "slug" => filter.matches_text(&self.slug),
            "targetUrl" => filter.matches_text(&self.target_url),
            "description" => filter.matches_text(&self.description),
            _ => true,
        }
    }

    fn compare(&self, other: &Self, key: ShortlinkSort) -> Ordering {
        match key {
            ShortlinkSort::Slug => self.slug.cmp(&other.slug),
            // most used first
            ShortlinkSort::Clicks => other.clicks.cmp(&self.clicks),
            ShortlinkSort::CreatedAt => other.created_at.cmp(&self.created_at),
        }
    }
}

pub fn list_config() -> ListConfig<Shortlink> {
    ListConfig {
        title: "Shortlinks",
        columns: vec![
            ColumnSpec {
                title: "Slug",
                sort: Some(ShortlinkSort::Slug),
                render: |link| format!("/{}", link.slug),
            },
            ColumnSpec {
                title: "Target",
                sort: None,
                render: |link| link.target_url.clone(),
            },
            ColumnSpec {
                title: "Clicks",
                sort: Some(ShortlinkSort::Clicks),
                render: |link| link.clicks.to_string(),
            },
            ColumnSpec {
                title: "Created",
                sort: Some(ShortlinkSort::CreatedAt),
                render: |link| format_datetime(&link.created_at),
            },
        ],
        fields: vec![
            FieldSpec {
                key: "slug",
                label: "Slug",
                kind: FieldKind::Text,
            },
            FieldSpec {
                key: "targetUrl",
                label: "Target URL",
                kind: FieldKind::Text,
            },
            FieldSpec {
                key: "description",
                label: "Description",
                kind: FieldKind::Text,
            },
        ],
        facet_options: None,
        row_label: |link| format!("/{}", link.slug),
        edit_route: |link| format!("/admin/shortlinks/{}", link.id),
        create_route: Some("/admin/shortlinks/new"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_rules() {
        assert!(valid_slug("summer-party-2025"));
        assert!(!valid_slug("Summer Party"));
        assert!(!valid_slug(""));
        assert!(!valid_slug("mixedCase"));
    }

    #[test]
    fn target_must_be_absolute_http() {
        assert!(valid_target("https://example.org/page"));
        assert!(valid_target("http://example.org"));
        assert!(valid_target("http://a"));
        assert!(!valid_target("example.org"));
        assert!(!valid_target("https://"));
        assert!(!valid_target("http://"));
        assert!(!valid_target("ftp://example.org"));
    }
}
