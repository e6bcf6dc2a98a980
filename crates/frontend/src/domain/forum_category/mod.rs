//! Forum categories: list configuration and the [`ListEntity`] wiring.

pub mod form;
pub mod list;

use std::cmp::Ordering;

use contracts::domain::forum::ForumCategory;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_engine::{
    ColumnSpec, FieldKind, FieldSpec, FilterValue, ListConfig, ListEntity, SortKeyCode,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CategorySort {
    Name,
    Position,
    CreatedAt,
}

impl SortKeyCode for CategorySort {
    fn as_code(&self) -> &'static str {
        match self {
            CategorySort::Name => "name",
            CategorySort::Position => "position",
            CategorySort::CreatedAt => "createdAt",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "name" => Some(CategorySort::Name),
            "position" => Some(CategorySort::Position),
            "createdAt" => Some(CategorySort::CreatedAt),
            _ => None,
        }
    }
}

impl ListEntity for ForumCategory {
    type SortKey = CategorySort;
    const ENTITY: &'static str = "forum-categories";

    fn id(&self) -> &str {
        &self.id
    }

    fn quick_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.description.clone()]
    }

    fn field_matches(&self, key: &str, filter: &FilterValue) -> bool {
        match key {
            "name" => filter.matches_text(&self.name),
            "description" => filter.matches_text(&self.description),
            _ => true,
        }
    }

    fn compare(&self, other: &Self, key: CategorySort) -> Ordering {
        match key {
            CategorySort::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            CategorySort::Position => self.position.cmp(&other.position),
            CategorySort::CreatedAt => other.created_at.cmp(&self.created_at),
        }
    }
}

pub fn list_config() -> ListConfig<ForumCategory> {
    ListConfig {
        title: "Forum categories",
        columns: vec![
            ColumnSpec {
                title: "Name",
                sort: Some(CategorySort::Name),
                render: |category| category.name.clone(),
            },
            ColumnSpec {
                title: "Description",
                sort: None,
                render: |category| category.description.clone(),
            },
            ColumnSpec {
                title: "Position",
                sort: Some(CategorySort::Position),
                render: |category| category.position.to_string(),
            },
            ColumnSpec {
                title: "Created",
                sort: Some(CategorySort::CreatedAt),
                render: |category| format_datetime(&category.created_at),
            },
        ],
        fields: vec![
            FieldSpec {
                key: "name",
                label: "Name",
                kind: FieldKind::Text,
            },
            FieldSpec {
                key: "description",
                label: "Description",
                kind: FieldKind::Text,
            },
        ],
        facet_options: None,
        row_label: |category| category.name.clone(),
        edit_route: |category| format!("/admin/forum-categories/{}", category.id),
        create_route: Some("/admin/forum-categories/new"),
    }
}
