//! Admin UI for the content entities. Each submodule wires one backend
//! collection into the generic list engine and provides its detail form.

pub mod blog;
pub mod comment;
pub mod event;
pub mod forum_category;
pub mod forum_post;
pub mod note;
pub mod shortlink;

/// (value, label) options for every visibility select and filter.
pub const VISIBILITY_OPTIONS: &[(&str, &str)] = &[
    ("public", "Public"),
    ("members", "Members only"),
    ("draft", "Draft"),
];

/// Split a comma-separated input into trimmed, non-empty values.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_empty() {
        assert_eq!(split_csv(" news, intro ,,"), vec!["news", "intro"]);
        assert!(split_csv("  ").is_empty());
    }
}
