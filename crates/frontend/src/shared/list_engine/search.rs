use super::entity::{FieldSpec, FilterValue, ListEntity};
use std::collections::BTreeMap;

/// Which search tab is active. Settings is not a filter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SearchTab {
    Quick,
    Advanced,
    Settings,
}

impl SearchTab {
    pub fn index(&self) -> usize {
        match self {
            SearchTab::Quick => 0,
            SearchTab::Advanced => 1,
            SearchTab::Settings => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            1 => SearchTab::Advanced,
            2 => SearchTab::Settings,
            _ => SearchTab::Quick,
        }
    }
}

impl Default for SearchTab {
    fn default() -> Self {
        SearchTab::Quick
    }
}

/// Current filter input: active tab, quick query, advanced per-field values.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SearchState {
    pub tab: SearchTab,
    pub q_all: String,
    pub fields: Vec<(String, FilterValue)>,
}

impl SearchState {
    /// Build the per-field predicates from raw control/URL values.
    pub fn with_fields(
        tab: SearchTab,
        q_all: String,
        specs: &[FieldSpec],
        raw: &BTreeMap<String, String>,
    ) -> Self {
        let fields = specs
            .iter()
            .filter_map(|spec| {
                raw.get(spec.key)
                    .map(|value| (spec.key.to_string(), spec.filter_from_raw(value)))
            })
            .collect();
        Self { tab, q_all, fields }
    }

    /// Whether the active tab has any non-empty criterion.
    pub fn has_criteria(&self) -> bool {
        match self.tab {
            SearchTab::Quick => !self.q_all.trim().is_empty(),
            SearchTab::Advanced => self.fields.iter().any(|(_, v)| !v.is_empty()),
            SearchTab::Settings => false,
        }
    }
}

/// True iff the full index must be the authoritative array: the active tab
/// is a search tab, the index has been fetched, and a criterion is set.
/// While this holds, the page slice is never filtered directly.
pub fn is_searching(search: &SearchState, index_len: usize) -> bool {
    index_len > 0 && search.has_criteria()
}

/// Apply the active tab's predicates. Quick: OR of substring checks over
/// the quick haystack. Advanced: AND of all non-empty field predicates.
pub fn filter_rows<T: ListEntity>(search: &SearchState, rows: &[T]) -> Vec<T> {
    match search.tab {
        SearchTab::Quick => {
            let needle = search.q_all.trim().to_lowercase();
            if needle.is_empty() {
                return rows.to_vec();
            }
            rows.iter()
                .filter(|row| {
                    row.quick_fields()
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
                })
                .cloned()
                .collect()
        }
        SearchTab::Advanced => rows
            .iter()
            .filter(|row| {
                search
                    .fields
                    .iter()
                    .filter(|(_, filter)| !filter.is_empty())
                    .all(|(key, filter)| row.field_matches(key, filter))
            })
            .cloned()
            .collect(),
        SearchTab::Settings => rows.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{post, Post};
    use super::*;

    fn quick(q: &str) -> SearchState {
        SearchState {
            tab: SearchTab::Quick,
            q_all: q.to_string(),
            fields: Vec::new(),
        }
    }

    #[test]
    fn quick_search_ors_over_haystack() {
        let rows = vec![
            post("1", "An http guide", "alice", 1),
            post("2", "Meeting notes", "bob", 2),
            post("3", "Plain", "http-fan", 3),
        ];
        let hits = filter_rows(&quick("HTTP"), &rows);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.id == "1" || p.id == "3"));
    }

    #[test]
    fn advanced_search_ands_nonempty_fields() {
        let mut pinned = post("1", "Pinned news", "alice", 1);
        pinned.pinned = true;
        let rows = vec![pinned, post("2", "Other news", "alice", 2)];

        let search = SearchState {
            tab: SearchTab::Advanced,
            q_all: String::new(),
            fields: vec![
                ("author".into(), FilterValue::Text("ali".into())),
                ("pinned".into(), FilterValue::Exact("true".into())),
                // empty fields are ignored, not treated as "match nothing"
                ("title".into(), FilterValue::Text("".into())),
            ],
        };
        let hits = filter_rows(&search, &rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn settings_tab_never_searches() {
        let search = SearchState {
            tab: SearchTab::Settings,
            q_all: "something".into(),
            fields: Vec::new(),
        };
        assert!(!search.has_criteria());
        assert!(!is_searching(&search, 10));
    }

    #[test]
    fn searching_requires_index_and_criteria() {
        assert!(!is_searching(&quick("x"), 0));
        assert!(!is_searching(&quick("  "), 10));
        assert!(is_searching(&quick("x"), 10));
    }

    #[test]
    fn quick_search_over_sixty_posts_four_match() {
        // Full index of 60 posts, 4 of which mention "http"; the rendered
        // rows are exactly those 4 regardless of the 25-row page slice.
        let mut index: Vec<Post> = (0..56)
            .map(|i| post(&format!("p{}", i), &format!("Post {}", i), "alice", 1))
            .collect();
        index.push(post("h1", "http basics", "alice", 2));
        index.push(post("h2", "more HTTP", "bob", 3));
        index.push(post("h3", "plain", "http-person", 4));
        let mut tagged = post("h4", "tagged", "carol", 5);
        tagged.tags = vec!["http".into()];
        index.push(tagged);

        let search = quick("http");
        assert!(is_searching(&search, index.len()));
        let hits = filter_rows(&search, &index);
        assert_eq!(hits.len(), 4);
    }
}
