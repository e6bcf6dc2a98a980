//! Member groups: list configuration and the [`ListEntity`] wiring.

pub mod form;
pub mod list;

use std::cmp::Ordering;

use contracts::system::groups::Group;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_engine::{
    ColumnSpec, FieldKind, FieldSpec, FilterValue, ListConfig, ListEntity, SortKeyCode,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GroupSort {
    Name,
    Members,
    CreatedAt,
}

impl SortKeyCode for GroupSort {
    fn as_code(&self) -> &'static str {
        match self {
            GroupSort::Name => "name",
            GroupSort::Members => "members",
            GroupSort::CreatedAt => "createdAt",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "name" => Some(GroupSort::Name),
            "members" => Some(GroupSort::Members),
            "createdAt" => Some(GroupSort::CreatedAt),
            _ => None,
        }
    }
}

impl ListEntity for Group {
    type SortKey = GroupSort;
    const ENTITY: &'static str = "groups";

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

    fn compare(&self, other: &Self, key: GroupSort) -> Ordering {
        match key {
            GroupSort::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            // largest groups first
            GroupSort::Members => other.member_count.cmp(&self.member_count),
            GroupSort::CreatedAt => other.created_at.cmp(&self.created_at),
        }
    }
}

pub fn list_config() -> ListConfig<Group> {
    ListConfig {
        title: "Groups",
        columns: vec![
            ColumnSpec {
                title: "Name",
                sort: Some(GroupSort::Name),
                render: |group| group.name.clone(),
            },
            ColumnSpec {
                title: "Description",
                sort: None,
                render: |group| group.description.clone(),
            },
            ColumnSpec {
                title: "Members",
                sort: Some(GroupSort::Members),
                render: |group| group.member_count.to_string(),
            },
            ColumnSpec {
                title: "Created",
                sort: Some(GroupSort::CreatedAt),
                render: |group| format_datetime(&group.created_at),
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
        row_label: |group| group.name.clone(),
        edit_route: |group| format!("/admin/groups/{}", group.id),
        create_route: Some("/admin/groups/new"),
    }
}
