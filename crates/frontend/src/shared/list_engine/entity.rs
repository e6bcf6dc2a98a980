use std::cmp::Ordering;

/// Closed set of sort keys for one entity, round-trippable through the URL.
///
/// Keeping this an enum (instead of a string-keyed comparator map) makes
/// adding a sortable field a compile-time-checked change.
pub trait SortKeyCode: Copy + PartialEq + Send + Sync + 'static {
    fn as_code(&self) -> &'static str;
    fn from_code(code: &str) -> Option<Self>
    where
        Self: Sized;
}

/// A record the generic list engine can search, sort and render.
pub trait ListEntity: Clone + PartialEq + Send + Sync + 'static {
    type SortKey: SortKeyCode;

    /// Backend path segment, e.g. "blog" for /api/blog.
    const ENTITY: &'static str;

    fn id(&self) -> &str;

    /// Haystack for the quick-search tab: one free-text query is matched
    /// via OR across these strings (case-insensitive substring).
    fn quick_fields(&self) -> Vec<String>;

    /// Advanced-search predicate for one field. Unknown keys match
    /// everything so stray URL params cannot hide rows.
    fn field_matches(&self, key: &str, filter: &FilterValue) -> bool;

    /// Comparator for one sort key. The key's own direction is the
    /// "unreversed" order (chronological keys sort newest first).
    fn compare(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

/// One advanced-search filter value, already shaped by its field kind.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    /// Case-insensitive substring containment.
    Text(String),
    /// Exact match for enums and booleans (compared as strings).
    Exact(String),
    /// Any element of the row's array field is in the selected set.
    AnyOf(Vec<String>),
}

impl FilterValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) | FilterValue::Exact(s) => s.trim().is_empty(),
            FilterValue::AnyOf(values) => values.is_empty(),
        }
    }

    pub fn matches_text(&self, value: &str) -> bool {
        match self {
            FilterValue::Text(needle) => value
                .to_lowercase()
                .contains(&needle.trim().to_lowercase()),
            FilterValue::Exact(expected) => value == expected,
            FilterValue::AnyOf(values) => values.iter().any(|v| v == value),
        }
    }

    pub fn matches_flag(&self, value: bool) -> bool {
        match self {
            FilterValue::Exact(expected) => {
                expected == if value { "true" } else { "false" }
            }
            _ => true,
        }
    }

    pub fn matches_any(&self, values: &[String]) -> bool {
        match self {
            FilterValue::AnyOf(selected) => {
                values.iter().any(|v| selected.iter().any(|s| s == v))
            }
            FilterValue::Text(needle) => {
                let needle = needle.trim().to_lowercase();
                values.iter().any(|v| v.to_lowercase().contains(&needle))
            }
            FilterValue::Exact(expected) => values.iter().any(|v| v == expected),
        }
    }
}

/// What kind of control (and predicate) an advanced-search field uses.
#[derive(Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    /// Tri-state: "" (inactive), "true", "false".
    Flag,
    /// Fixed (value, label) options.
    Choice(&'static [(&'static str, &'static str)]),
    /// Multi-select over values derived from the full index (facets).
    Multi,
}

/// One advanced-search field of an entity.
#[derive(Clone)]
pub struct FieldSpec {
    /// URL query key, e.g. "title", "showAtHome".
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Shape a raw URL/control value into the predicate for this field.
    /// Multi values travel comma-joined through the URL.
    pub fn filter_from_raw(&self, raw: &str) -> FilterValue {
        match self.kind {
            FieldKind::Text => FilterValue::Text(raw.to_string()),
            FieldKind::Flag | FieldKind::Choice(_) => FilterValue::Exact(raw.to_string()),
            FieldKind::Multi => FilterValue::AnyOf(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_filter_is_case_insensitive_substring() {
        let filter = FilterValue::Text("HTTP".into());
        assert!(filter.matches_text("an http link"));
        assert!(!filter.matches_text("plain"));
        assert!(FilterValue::Text("  ".into()).is_empty());
    }

    #[test]
    fn flag_filter_is_exact() {
        assert!(FilterValue::Exact("true".into()).matches_flag(true));
        assert!(!FilterValue::Exact("true".into()).matches_flag(false));
    }

    #[test]
    fn multi_filter_matches_any_selected() {
        let filter = FilterValue::AnyOf(vec!["news".into(), "intro".into()]);
        assert!(filter.matches_any(&["events".into(), "news".into()]));
        assert!(!filter.matches_any(&["events".into()]));
    }

    #[test]
    fn multi_raw_value_is_comma_split() {
        let spec = FieldSpec {
            key: "tags",
            label: "Tags",
            kind: FieldKind::Multi,
        };
        assert_eq!(
            spec.filter_from_raw("news, intro,"),
            FilterValue::AnyOf(vec!["news".into(), "intro".into()])
        );
        assert!(spec.filter_from_raw("").is_empty());
    }
}
