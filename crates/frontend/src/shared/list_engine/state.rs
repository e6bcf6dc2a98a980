//! In-memory list data and its load state machine.
//!
//! Page slice and full index load independently (idle -> loading -> ready);
//! a failed load returns to ready with the previous data intact, so the
//! table keeps showing stale rows next to an error notification. Each load
//! carries a generation token: a completion whose token is no longer
//! current is discarded, so rapid page-size changes cannot let an older
//! response overwrite a newer one.

use crate::shared::api::PageSlice;

use super::entity::ListEntity;
use super::search::{is_searching, SearchState};
use super::sort::{sort_rows, SortState};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListData<T: ListEntity> {
    pub page_items: Vec<T>,
    /// 1-based page number as reported by the backend.
    pub current_page: usize,
    pub total_pages: usize,
    pub index: Vec<T>,
    pub page_phase: LoadPhase,
    pub index_phase: LoadPhase,
    page_generation: u64,
    index_generation: u64,
}

impl<T: ListEntity> Default for ListData<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListEntity> ListData<T> {
    pub fn new() -> Self {
        Self {
            page_items: Vec::new(),
            current_page: 1,
            total_pages: 0,
            index: Vec::new(),
            page_phase: LoadPhase::Idle,
            index_phase: LoadPhase::Idle,
            page_generation: 0,
            index_generation: 0,
        }
    }

    /// Start a page fetch; the returned token must accompany the completion.
    pub fn begin_page_load(&mut self) -> u64 {
        self.page_generation += 1;
        self.page_phase = LoadPhase::Loading;
        self.page_generation
    }

    /// Install a fetched page. Returns false (and changes nothing) when a
    /// newer fetch has started since `token` was issued.
    pub fn apply_page(&mut self, token: u64, slice: PageSlice<T>) -> bool {
        if token != self.page_generation {
            return false;
        }
        self.page_items = slice.items;
        self.current_page = slice.current_page;
        self.total_pages = slice.total_pages;
        self.page_phase = LoadPhase::Ready;
        true
    }

    /// A failed fetch keeps the previous rows (no partial overwrite).
    pub fn fail_page(&mut self, token: u64) {
        if token == self.page_generation {
            self.page_phase = LoadPhase::Ready;
        }
    }

    pub fn begin_index_load(&mut self) -> u64 {
        self.index_generation += 1;
        self.index_phase = LoadPhase::Loading;
        self.index_generation
    }

    pub fn apply_index(&mut self, token: u64, items: Vec<T>) -> bool {
        if token != self.index_generation {
            return false;
        }
        self.index = items;
        self.index_phase = LoadPhase::Ready;
        true
    }

    pub fn fail_index(&mut self, token: u64) {
        if token == self.index_generation {
            self.index_phase = LoadPhase::Ready;
        }
    }

    pub fn loading(&self) -> bool {
        self.page_phase == LoadPhase::Loading || self.index_phase == LoadPhase::Loading
    }

    /// Optimistic local patch after a successful delete: the row leaves
    /// both arrays in place, no refetch. Calling again with the same id is
    /// a no-op. Returns whether anything was removed.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.page_items.len() + self.index.len();
        self.page_items.retain(|item| item.id() != id);
        self.index.retain(|item| item.id() != id);
        before != self.page_items.len() + self.index.len()
    }

    pub fn is_searching(&self, search: &SearchState) -> bool {
        is_searching(search, self.index.len())
    }

    /// The rows the table renders: sort over the authoritative array, then
    /// filter (see `sort_rows`).
    pub fn visible_rows(&self, search: &SearchState, sort: SortState<T::SortKey>) -> Vec<T> {
        sort_rows(sort, search, &self.page_items, &self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{post, Post, PostSort};
    use super::*;
    use crate::shared::list_engine::search::SearchTab;

    fn slice(ids: &[&str], page: usize, pages: usize) -> PageSlice<Post> {
        PageSlice {
            items: ids.iter().map(|id| post(id, id, "x", 1)).collect(),
            current_page: page,
            total_pages: pages,
        }
    }

    #[test]
    fn page_load_walks_idle_loading_ready() {
        let mut data = ListData::<Post>::new();
        assert_eq!(data.page_phase, LoadPhase::Idle);
        let token = data.begin_page_load();
        assert_eq!(data.page_phase, LoadPhase::Loading);
        assert!(data.apply_page(token, slice(&["1"], 1, 1)));
        assert_eq!(data.page_phase, LoadPhase::Ready);
        assert_eq!(data.current_page, 1);
    }

    #[test]
    fn failed_load_keeps_stale_rows_and_returns_to_ready() {
        let mut data = ListData::<Post>::new();
        let token = data.begin_page_load();
        data.apply_page(token, slice(&["1", "2"], 1, 2));

        let token = data.begin_page_load();
        data.fail_page(token);
        assert_eq!(data.page_phase, LoadPhase::Ready);
        assert_eq!(data.page_items.len(), 2);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut data = ListData::<Post>::new();
        let old = data.begin_page_load();
        let new = data.begin_page_load();
        // the older request resolves last; it must not win
        assert!(data.apply_page(new, slice(&["new"], 2, 3)));
        assert!(!data.apply_page(old, slice(&["old"], 1, 3)));
        assert_eq!(data.page_items[0].id, "new");
        assert_eq!(data.current_page, 2);
    }

    #[test]
    fn index_loads_independently_of_page() {
        let mut data = ListData::<Post>::new();
        let page_token = data.begin_page_load();
        let index_token = data.begin_index_load();
        assert!(data.loading());
        data.apply_index(index_token, vec![post("1", "a", "x", 1)]);
        assert_eq!(data.index_phase, LoadPhase::Ready);
        assert_eq!(data.page_phase, LoadPhase::Loading);
        data.apply_page(page_token, slice(&["1"], 1, 1));
        assert!(!data.loading());
    }

    #[test]
    fn delete_patches_both_arrays_and_is_idempotent() {
        let mut data = ListData::<Post>::new();
        let token = data.begin_page_load();
        data.apply_page(token, slice(&["abc123", "other"], 1, 1));
        let token = data.begin_index_load();
        data.apply_index(
            token,
            vec![post("abc123", "a", "x", 1), post("other", "b", "x", 2)],
        );

        assert!(data.remove_by_id("abc123"));
        assert!(data.page_items.iter().all(|p| p.id != "abc123"));
        assert!(data.index.iter().all(|p| p.id != "abc123"));
        assert_eq!(data.page_items.len(), 1);
        assert_eq!(data.index.len(), 1);

        // second delete of the same id: no error, no change
        assert!(!data.remove_by_id("abc123"));
        assert_eq!(data.page_items.len(), 1);
        assert_eq!(data.index.len(), 1);
    }

    #[test]
    fn delete_shrinks_visible_rows_by_one_without_refetch() {
        let mut data = ListData::<Post>::new();
        let token = data.begin_page_load();
        data.apply_page(token, slice(&["a", "b", "c"], 1, 1));
        let search = SearchState::default();
        let sort = SortState::<PostSort>::default();
        let before = data.visible_rows(&search, sort).len();
        data.remove_by_id("b");
        assert_eq!(data.visible_rows(&search, sort).len(), before - 1);
    }

    #[test]
    fn searching_rows_are_a_subset_of_the_index() {
        let mut data = ListData::<Post>::new();
        let token = data.begin_page_load();
        // page slice deliberately contains a row that is NOT in the index
        data.apply_page(token, slice(&["page-only http"], 1, 3));
        let token = data.begin_index_load();
        data.apply_index(
            token,
            vec![post("i1", "http one", "x", 1), post("i2", "other", "x", 2)],
        );

        let search = SearchState {
            tab: SearchTab::Quick,
            q_all: "http".into(),
            fields: Vec::new(),
        };
        assert!(data.is_searching(&search));
        let rows = data.visible_rows(&search, SortState::default());
        assert!(rows
            .iter()
            .all(|row| data.index.iter().any(|i| i.id == row.id)));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "i1");
    }
}
