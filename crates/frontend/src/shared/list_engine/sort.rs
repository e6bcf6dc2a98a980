use super::entity::ListEntity;
use super::search::{filter_rows, is_searching, SearchState};

/// Single-key sort with an ascending/descending toggle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SortState<K> {
    pub key: Option<K>,
    pub reversed: bool,
}

impl<K> Default for SortState<K> {
    fn default() -> Self {
        Self {
            key: None,
            reversed: false,
        }
    }
}

impl<K: Copy + PartialEq> SortState<K> {
    /// Header-click behaviour: same key flips direction, new key starts
    /// in the comparator's own direction.
    pub fn toggle(&mut self, key: K) {
        if self.key == Some(key) {
            self.reversed = !self.reversed;
        } else {
            self.key = Some(key);
            self.reversed = false;
        }
    }
}

/// The list pipeline: pick the authoritative array (full index while a
/// search is active, else the page slice), sort, reverse, then filter.
///
/// Sort runs before filter on purpose: the comparator never needs to know
/// whether a filter follows, and filtering preserves relative order among
/// surviving rows.
pub fn sort_rows<T: ListEntity>(
    sort: SortState<T::SortKey>,
    search: &SearchState,
    page_items: &[T],
    index: &[T],
) -> Vec<T> {
    let source: &[T] = if is_searching(search, index.len()) {
        index
    } else {
        page_items
    };

    let mut rows: Vec<T> = source.to_vec();
    if let Some(key) = sort.key {
        rows.sort_by(|a, b| a.compare(b, key));
        if sort.reversed {
            rows.reverse();
        }
    }
    filter_rows(search, &rows)
}

#[cfg(test)]
mod tests {
    use super::super::testing::{post, Post, PostSort};
    use super::*;
    use crate::shared::list_engine::search::SearchTab;

    fn no_search() -> SearchState {
        SearchState::default()
    }

    #[test]
    fn unsorted_delegates_to_filter_in_original_order() {
        let page = vec![post("1", "b", "x", 1), post("2", "a", "x", 2)];
        let rows = sort_rows(SortState::<PostSort>::default(), &no_search(), &page, &[]);
        assert_eq!(rows, page);
    }

    #[test]
    fn created_at_sorts_newest_first_by_default() {
        let page = vec![
            post("old", "old", "x", 1),
            post("new", "new", "x", 20),
            post("mid", "mid", "x", 10),
        ];
        let sort = SortState {
            key: Some(PostSort::CreatedAt),
            reversed: false,
        };
        let rows = sort_rows(sort, &no_search(), &page, &[]);
        let ids: Vec<&str> = rows.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn double_reverse_restores_order() {
        let page = vec![
            post("1", "cherry", "x", 1),
            post("2", "Apple", "x", 2),
            post("3", "banana", "x", 3),
        ];
        let forward = sort_rows(
            SortState {
                key: Some(PostSort::Title),
                reversed: false,
            },
            &no_search(),
            &page,
            &[],
        );
        let backward = sort_rows(
            SortState {
                key: Some(PostSort::Title),
                reversed: true,
            },
            &no_search(),
            &page,
            &[],
        );
        let mut restored = backward.clone();
        restored.reverse();
        assert_eq!(forward, restored);
        // case-insensitive: "Apple" < "banana" < "cherry"
        assert_eq!(forward[0].id, "2");
    }

    #[test]
    fn active_search_sorts_the_full_index_not_the_page() {
        let page = vec![post("p1", "visible http page row", "x", 1)];
        let index = vec![
            post("i1", "http one", "x", 1),
            post("i2", "http two", "x", 5),
            post("i3", "unrelated", "x", 3),
        ];
        let search = SearchState {
            tab: SearchTab::Quick,
            q_all: "http".into(),
            fields: Vec::new(),
        };
        let sort = SortState {
            key: Some(PostSort::CreatedAt),
            reversed: false,
        };
        let rows = sort_rows(sort, &search, &page, &index);
        let ids: Vec<&str> = rows.iter().map(|p| p.id.as_str()).collect();
        // sourced from the index, sorted newest first, then filtered
        assert_eq!(ids, vec!["i2", "i1"]);
    }

    #[test]
    fn toggle_same_key_flips_new_key_resets() {
        let mut sort = SortState::<PostSort>::default();
        sort.toggle(PostSort::Title);
        assert_eq!(sort.key, Some(PostSort::Title));
        assert!(!sort.reversed);
        sort.toggle(PostSort::Title);
        assert!(sort.reversed);
        sort.toggle(PostSort::CreatedAt);
        assert_eq!(sort.key, Some(PostSort::CreatedAt));
        assert!(!sort.reversed);
    }

    /// Filtering after sorting keeps the sorted relative order (the sort
    /// and the sorted-then-filtered projection agree on surviving rows).
    #[test]
    fn filter_preserves_sorted_relative_order() {
        let index: Vec<Post> = vec![
            post("a", "http z", "x", 2),
            post("b", "http a", "x", 9),
            post("c", "other", "x", 5),
            post("d", "http m", "x", 7),
        ];
        let search = SearchState {
            tab: SearchTab::Quick,
            q_all: "http".into(),
            fields: Vec::new(),
        };
        let sort = SortState {
            key: Some(PostSort::Title),
            reversed: false,
        };
        let rows = sort_rows(sort, &search, &[], &index);
        let titles: Vec<&str> = rows.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["http a", "http m", "http z"]);
    }
}
