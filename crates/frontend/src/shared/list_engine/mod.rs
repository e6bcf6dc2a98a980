//! Generic list-view pipeline shared by every admin entity.
//!
//! One engine, parameterized by a per-entity [`ListConfig`], replaces the
//! near-duplicate list components this would otherwise need: page fetch +
//! full-index fetch, client-side quick/advanced search, single-key sort,
//! pagination, URL query-string sync and localStorage-backed page size.

pub mod entity;
pub mod pagination;
pub mod query;
pub mod search;
pub mod sort;
pub mod state;
pub mod storage;
pub mod view;

pub use entity::{FieldKind, FieldSpec, FilterValue, ListEntity, SortKeyCode};
pub use query::{add_query_param, fetch_url_params, remove_query_param, ListQuery, UrlAdapter};
pub use search::{is_searching, SearchState, SearchTab};
pub use sort::SortState;
pub use state::{ListData, LoadPhase};
pub use view::{ColumnSpec, EntityList, ListConfig};

#[cfg(test)]
pub(crate) mod testing {
    use super::entity::{FilterValue, ListEntity, SortKeyCode};
    use chrono::{DateTime, TimeZone, Utc};
    use std::cmp::Ordering;

    /// Minimal entity used by the engine's unit tests.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Post {
        pub id: String,
        pub title: String,
        pub author: String,
        pub tags: Vec<String>,
        pub pinned: bool,
        pub created_at: DateTime<Utc>,
    }

    pub fn post(id: &str, title: &str, author: &str, day: u32) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            tags: Vec::new(),
            pinned: false,
            created_at: Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap(),
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub enum PostSort {
        Title,
        CreatedAt,
    }

    impl SortKeyCode for PostSort {
        fn as_code(&self) -> &'static str {
            match self {
                PostSort::Title => "title",
                PostSort::CreatedAt => "createdAt",
            }
        }

        fn from_code(code: &str) -> Option<Self> {
            match code {
                "title" => Some(PostSort::Title),
                "createdAt" => Some(PostSort::CreatedAt),
                _ => None,
            }
        }
    }

    impl ListEntity for Post {
        type SortKey = PostSort;
        const ENTITY: &'static str = "blog";

        fn id(&self) -> &str {
            &self.id
        }

        fn quick_fields(&self) -> Vec<String> {
            let mut fields = vec![
                self.title.clone(),
                self.author.clone(),
                crate::shared::date_utils::format_datetime(&self.created_at),
            ];
            fields.extend(self.tags.iter().cloned());
            fields
        }

        fn field_matches(&self, key: &str, filter: &FilterValue) -> bool {
            match key {
                "title" => filter.matches_text(&self.title),
                "author" => filter.matches_text(&self.author),
                "pinned" => filter.matches_flag(self.pinned),
                "tags" => filter.matches_any(&self.tags),
                _ => true,
            }
        }

        fn compare(&self, other: &Self, key: PostSort) -> Ordering {
            match key {
                PostSort::Title => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
                // newest first by convention
                PostSort::CreatedAt => other.created_at.cmp(&self.created_at),
            }
        }
    }
}
