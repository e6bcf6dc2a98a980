//! Events: list configuration and the [`ListEntity`] wiring.

pub mod form;
pub mod list;

use std::cmp::Ordering;

use contracts::domain::event::Event;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_engine::view::distinct_values;
use crate::shared::list_engine::{
    ColumnSpec, FieldKind, FieldSpec, FilterValue, ListConfig, ListEntity, SortKeyCode,
};

use super::VISIBILITY_OPTIONS;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventSort {
    Title,
    StartsAt,
    CreatedAt,
}

impl SortKeyCode for EventSort {
    fn as_code(&self) -> &'static str {
        match self {
            EventSort::Title => "title",
            EventSort::StartsAt => "startsAt",
            EventSort::CreatedAt => "createdAt",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "title" => Some(EventSort::Title),
            "startsAt" => Some(EventSort::StartsAt),
            "createdAt" => Some(EventSort::CreatedAt),
            _ => None,
        }
    }
}

impl ListEntity for Event {
    type SortKey = EventSort;
    const ENTITY: &'static str = "events";

    fn id(&self) -> &str {
        &self.id
    }

    fn quick_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.title.clone(),
            self.location.clone(),
            self.description.clone(),
            format_datetime(&self.starts_at),
        ];
        fields.extend(self.organizers.iter().cloned());
        fields
    }

    fn field_matches(&self, key: &str, filter: &FilterValue) -> bool {
        match key {
            "title" => filter.matches_text(&self.title),
            "location" => filter.matches_text(&self.location),
            "organizers" => filter.matches_any(&self.organizers),
            "visibility" => filter.matches_text(self.visibility.as_str()),
            _ => true,
        }
    }

    fn compare(&self, other: &Self, key: EventSort) -> Ordering {
        match key {
            EventSort::Title => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            // upcoming events sort soonest first, past ones after
            EventSort::StartsAt => self.starts_at.cmp(&other.starts_at),
            EventSort::CreatedAt => other.created_at.cmp(&self.created_at),
        }
    }
}

pub fn list_config() -> ListConfig<Event> {
    ListConfig {
        title: "Events",
        columns: vec![
            ColumnSpec {
                title: "Title",
                sort: Some(EventSort::Title),
                render: |event| event.title.clone(),
            },
            ColumnSpec {
                title: "Location",
                sort: None,
                render: |event| event.location.clone(),
            },
            ColumnSpec {
                title: "Starts",
                sort: Some(EventSort::StartsAt),
                render: |event| format_datetime(&event.starts_at),
            },
            ColumnSpec {
                title: "Organizers",
                sort: None,
                render: |event| event.organizers.join(", "),
            },
            ColumnSpec {
                title: "Visibility",
                sort: None,
                render: |event| event.visibility.label().to_string(),
            },
        ],
        fields: vec![
            FieldSpec {
                key: "title",
                label: "Title",
                kind: FieldKind::Text,
            },
            FieldSpec {
                key: "location",
                label: "Location",
                kind: FieldKind::Text,
            },
            FieldSpec {
                key: "organizers",
                label: "Organizers",
                kind: FieldKind::Multi,
            },
            FieldSpec {
                key: "visibility",
                label: "Visibility",
                kind: FieldKind::Choice(VISIBILITY_OPTIONS),
            },
        ],
        facet_options: Some(|items, key| match key {
            "organizers" => distinct_values(items, |event| event.organizers.clone()),
            _ => Vec::new(),
        }),
        row_label: |event| event.title.clone(),
        edit_route: |event| format!("/admin/events/{}", event.id),
        create_route: Some("/admin/events/new"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::common::Visibility;

    fn event(title: &str, start_day: u32) -> Event {
        Event {
            id: "e1".into(),
            title: title.into(),
            organizers: vec!["board".into()],
            location: "Clubhouse".into(),
            starts_at: Utc.with_ymd_and_hms(2025, 9, start_day, 19, 0, 0).unwrap(),
            ends_at: None,
            description: String::new(),
            visibility: Visibility::Public,
            created_at: Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn starts_at_sorts_soonest_first() {
        let early = event("a", 5);
        let late = event("b", 20);
        assert_eq!(
            early.compare(&late, EventSort::StartsAt),
            std::cmp::Ordering::Less
        );
    }

    #[test]
    fn organizer_filter_uses_membership() {
        let e = event("a", 5);
        assert!(e.field_matches("organizers", &FilterValue::AnyOf(vec!["board".into()])));
        assert!(!e.field_matches("organizers", &FilterValue::AnyOf(vec!["it".into()])));
    }
}
