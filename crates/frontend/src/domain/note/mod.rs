//! Internal notes: list configuration and the [`ListEntity`] wiring.

pub mod form;
pub mod list;

use std::cmp::Ordering;

use contracts::domain::note::Note;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_engine::view::distinct_values;
use crate::shared::list_engine::{
    ColumnSpec, FieldKind, FieldSpec, FilterValue, ListConfig, ListEntity, SortKeyCode,
};

use super::VISIBILITY_OPTIONS;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoteSort {
    Title,
    CreatedAt,
    UpdatedAt,
}

impl SortKeyCode for NoteSort {
    fn as_code(&self) -> &'static str {
        match self {
            NoteSort::Title => "title",
            NoteSort::CreatedAt => "createdAt",
            NoteSort::UpdatedAt => "updatedAt",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "title" => Some(NoteSort::Title),
            "createdAt" => Some(NoteSort::CreatedAt),
            "updatedAt" => Some(NoteSort::UpdatedAt),
            _ => None,
        }
    }
}

impl ListEntity for Note {
    type SortKey = NoteSort;
    const ENTITY: &'static str = "notes";

    fn id(&self) -> &str {
        &self.id
    }

    fn quick_fields(&self) -> Vec<String> {
        let mut fields = vec![self.title.clone(), self.content.clone()];
        fields.extend(self.tags.iter().cloned());
        fields
    }

    fn field_matches(&self, key: &str, filter: &FilterValue) -> bool {
        match key {
            "title" => filter.matches_text(&self.title),
            "tags" => filter.matches_any(&self.tags),
            "visibility" => filter.matches_text(self.visibility.as_str()),
            _ => true,
        }
    }

    fn compare(&self, other: &Self, key: NoteSort) -> Ordering {
        match key {
            NoteSort::Title => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            NoteSort::CreatedAt => other.created_at.cmp(&self.created_at),
            NoteSort::UpdatedAt => other.updated_at.cmp(&self.updated_at),
        }
    }
}

pub fn list_config() -> ListConfig<Note> {
    ListConfig {
        title: "Notes",
        columns: vec![
            ColumnSpec {
                title: "Title",
                sort: Some(NoteSort::Title),
                render: |note| note.title.clone(),
            },
            ColumnSpec {
                title: "Tags",
                sort: None,
                render: |note| note.tags.join(", "),
            },
            ColumnSpec {
                title: "Visibility",
                sort: None,
                render: |note| note.visibility.label().to_string(),
            },
            ColumnSpec {
                title: "Updated",
                sort: Some(NoteSort::UpdatedAt),
                render: |note| format_datetime(&note.updated_at),
            },
        ],
        fields: vec![
            FieldSpec {
                key: "title",
                label: "Title",
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
        ],
        facet_options: Some(|items, key| match key {
            "tags" => distinct_values(items, |note| note.tags.clone()),
            _ => Vec::new(),
        }),
        row_label: |note| note.title.clone(),
        edit_route: |note| format!("/admin/notes/{}", note.id),
        create_route: Some("/admin/notes/new"),
    }
}
