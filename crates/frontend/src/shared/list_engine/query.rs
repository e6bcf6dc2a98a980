//! URL query-string persistence for the list state.
//!
//! Every interactive control writes its key here (shallow, non-reloading
//! history replace) and mount parses the same keys back, so a deep link
//! reproduces the exact table view. Absence of a key means "default".

use std::cell::RefCell;
use std::collections::BTreeMap;

/// Where the query string lives. The browser implementation talks to
/// window.history; tests use an in-memory fake.
pub trait UrlAdapter {
    /// Current query string, without the leading '?'.
    fn read(&self) -> String;
    /// Replace the query string (no navigation, no reload).
    fn write(&self, query: &str);
}

/// window.location / window.history backed adapter.
#[derive(Clone, Copy, Default)]
pub struct BrowserUrl;

impl UrlAdapter for BrowserUrl {
    fn read(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
            .trim_start_matches('?')
            .to_string()
    }

    fn write(&self, query: &str) {
        let new_url = if query.is_empty() {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_string())
        } else {
            format!("?{}", query)
        };
        if let Some(w) = web_sys::window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        }
    }
}

/// In-memory adapter for unit tests.
#[derive(Default)]
pub struct MemoryUrl {
    query: RefCell<String>,
}

impl UrlAdapter for MemoryUrl {
    fn read(&self) -> String {
        self.query.borrow().clone()
    }

    fn write(&self, query: &str) {
        *self.query.borrow_mut() = query.to_string();
    }
}

/// Parse the current URL into a key/value map.
pub fn fetch_url_params(url: &dyn UrlAdapter) -> BTreeMap<String, String> {
    serde_qs::from_str(&url.read()).unwrap_or_default()
}

fn write_params(url: &dyn UrlAdapter, params: &BTreeMap<String, String>) {
    let query = serde_qs::to_string(params).unwrap_or_default();
    url.write(&query);
}

/// Set one query param, keeping the rest of the query string intact.
pub fn add_query_param(url: &dyn UrlAdapter, key: &str, value: &str) {
    let mut params = fetch_url_params(url);
    params.insert(key.to_string(), value.to_string());
    write_params(url, &params);
}

/// Remove one query param, keeping the rest of the query string intact.
pub fn remove_query_param(url: &dyn UrlAdapter, key: &str) {
    let mut params = fetch_url_params(url);
    params.remove(key);
    write_params(url, &params);
}

/// The list-view state that round-trips through the query string.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: usize,
    /// Search tab index (0 quick, 1 advanced, 2 settings).
    pub tab: usize,
    /// Quick-search query.
    pub q_all: String,
    /// Sort key code, if a column is sorted.
    pub sort: Option<String>,
    pub desc: bool,
    /// Raw advanced-search values keyed by field key.
    pub fields: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            tab: 0,
            q_all: String::new(),
            sort: None,
            desc: false,
            fields: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    /// Reconstruct the state from URL params. `field_keys` restricts which
    /// leftover keys are taken as advanced filters.
    pub fn from_params(params: &BTreeMap<String, String>, field_keys: &[&str]) -> Self {
        let mut query = ListQuery::default();
        if let Some(page) = params.get("page").and_then(|v| v.parse().ok()) {
            query.page = page;
        }
        if let Some(tab) = params.get("tab").and_then(|v| v.parse().ok()) {
            query.tab = tab;
        }
        if let Some(q_all) = params.get("qAll") {
            query.q_all = q_all.clone();
        }
        query.sort = params.get("sort").cloned();
        query.desc = params.get("desc").map(|v| v == "true").unwrap_or(false);
        for key in field_keys {
            if let Some(value) = params.get(*key) {
                if !value.is_empty() {
                    query.fields.insert((*key).to_string(), value.clone());
                }
            }
        }
        query
    }

    /// Serialize to URL params, omitting defaults so untouched controls
    /// leave no trace in the address bar.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if self.page > 1 {
            params.insert("page".to_string(), self.page.to_string());
        }
        if self.tab != 0 {
            params.insert("tab".to_string(), self.tab.to_string());
        }
        if !self.q_all.is_empty() {
            params.insert("qAll".to_string(), self.q_all.clone());
        }
        if let Some(sort) = &self.sort {
            params.insert("sort".to_string(), sort.clone());
            if self.desc {
                params.insert("desc".to_string(), "true".to_string());
            }
        }
        for (key, value) in &self.fields {
            if !value.is_empty() {
                params.insert(key.clone(), value.clone());
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD_KEYS: &[&str] = &["title", "author", "tags", "pinned"];

    #[test]
    fn absent_keys_mean_defaults() {
        let url = MemoryUrl::default();
        let query = ListQuery::from_params(&fetch_url_params(&url), FIELD_KEYS);
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn add_and_remove_keep_other_params() {
        let url = MemoryUrl::default();
        add_query_param(&url, "qAll", "http");
        add_query_param(&url, "page", "3");
        remove_query_param(&url, "qAll");
        let params = fetch_url_params(&url);
        assert_eq!(params.get("page").map(String::as_str), Some("3"));
        assert!(!params.contains_key("qAll"));
    }

    #[test]
    fn round_trip_reconstructs_equivalent_state() {
        let mut query = ListQuery::default();
        query.page = 4;
        query.tab = 1;
        query.q_all = "web site".to_string();
        query.sort = Some("createdAt".to_string());
        query.desc = true;
        query
            .fields
            .insert("tags".to_string(), "news,intro".to_string());
        query.fields.insert("pinned".to_string(), "true".to_string());

        let url = MemoryUrl::default();
        for (key, value) in query.to_params() {
            add_query_param(&url, &key, &value);
        }
        let restored = ListQuery::from_params(&fetch_url_params(&url), FIELD_KEYS);
        assert_eq!(restored, query);
    }

    #[test]
    fn query_values_survive_percent_encoding() {
        let url = MemoryUrl::default();
        add_query_param(&url, "qAll", "a&b=c d");
        let params = fetch_url_params(&url);
        assert_eq!(params.get("qAll").map(String::as_str), Some("a&b=c d"));
    }

    #[test]
    fn defaults_serialize_to_empty_query() {
        assert!(ListQuery::default().to_params().is_empty());
    }
}
