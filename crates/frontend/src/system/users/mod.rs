//! User administration: list configuration and the [`ListEntity`] wiring.

pub mod form;
pub mod list;

use std::cmp::Ordering;

use contracts::system::users::User;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_engine::view::distinct_values;
use crate::shared::list_engine::{
    ColumnSpec, FieldKind, FieldSpec, FilterValue, ListConfig, ListEntity, SortKeyCode,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UserSort {
    Username,
    DisplayName,
    CreatedAt,
}

impl SortKeyCode for UserSort {
    fn as_code(&self) -> &'static str {
        match self {
            UserSort::Username => "username",
            UserSort::DisplayName => "displayName",
            UserSort::CreatedAt => "createdAt",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "username" => Some(UserSort::Username),
            "displayName" => Some(UserSort::DisplayName),
            "createdAt" => Some(UserSort::CreatedAt),
            _ => None,
        }
    }
}

impl ListEntity for User {
    type SortKey = UserSort;
    const ENTITY: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }

    fn quick_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.username.clone(),
            self.display_name.clone(),
            self.email.clone().unwrap_or_default(),
        ];
        fields.extend(self.roles.iter().cloned());
        fields.extend(self.groups.iter().cloned());
        fields
    }

    fn field_matches(&self, key: &str, filter: &FilterValue) -> bool {
        match key {
            "username" => filter.matches_text(&self.username),
            "displayName" => filter.matches_text(&self.display_name),
            "email" => filter.matches_text(self.email.as_deref().unwrap_or("")),
            "roles" => filter.matches_any(&self.roles),
            "groups" => filter.matches_any(&self.groups),
            "active" => filter.matches_flag(self.active),
            _ => true,
        }
    }

    fn compare(&self, other: &Self, key: UserSort) -> Ordering {
        match key {
            UserSort::Username => self.username.to_lowercase().cmp(&other.username.to_lowercase()),
            UserSort::DisplayName => self
                .display_name
                .to_lowercase()
                .cmp(&other.display_name.to_lowercase()),
            UserSort::CreatedAt => other.created_at.cmp(&self.created_at),
        }
    }
}

pub fn list_config() -> ListConfig<User> {
    ListConfig {
        title: "Users",
        columns: vec![
            ColumnSpec {
                title: "Username",
                sort: Some(UserSort::Username),
                render: |user| user.username.clone(),
            },
            ColumnSpec {
                title: "Name",
                sort: Some(UserSort::DisplayName),
                render: |user| user.display_name.clone(),
            },
            ColumnSpec {
                title: "Email",
                sort: None,
                render: |user| user.email.clone().unwrap_or_default(),
            },
            ColumnSpec {
                title: "Roles",
                sort: None,
                render: |user| user.roles.join(", "),
            },
            ColumnSpec {
                title: "Active",
                sort: None,
                render: |user| if user.active { "Yes" } else { "No" }.to_string(),
            },
            ColumnSpec {
                title: "Created",
                sort: Some(UserSort::CreatedAt),
                render: |user| format_datetime(&user.created_at),
            },
        ],
        fields: vec![
            FieldSpec {
                key: "username",
                label: "Username",
                kind: FieldKind::Text,
            },
            FieldSpec {
                key: "email",
                label: "Email",
                kind: FieldKind::Text,
            },
            FieldSpec {
                key: "roles",
                label: "Roles",
                kind: FieldKind::Multi,
            },
            FieldSpec {
                key: "groups",
                label: "Groups",
                kind: FieldKind::Multi,
            },
            FieldSpec {
                key: "active",
                label: "Active",
                kind: FieldKind::Flag,
            },
        ],
        facet_options: Some(|items, key| match key {
            "roles" => distinct_values(items, |user| user.roles.clone()),
            "groups" => distinct_values(items, |user| user.groups.clone()),
            _ => Vec::new(),
        }),
        row_label: |user| user.username.clone(),
        edit_route: |user| format!("/admin/users/{}", user.id),
        create_route: Some("/admin/users/new"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user(name: &str, roles: &[&str], active: bool) -> User {
        User {
            id: "u1".into(),
            username: name.into(),
            display_name: String::new(),
            email: None,
            roles: roles.iter().map(|r| r.to_string()).collect(),
            groups: Vec::new(),
            active,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn role_filter_matches_membership() {
        let admin = user("ann", &["admin", "editor"], true);
        let filter = FilterValue::AnyOf(vec!["admin".into()]);
        assert!(admin.field_matches("roles", &filter));
        assert!(!user("bob", &["editor"], true).field_matches("roles", &filter));
    }

    #[test]
    fn inactive_users_can_be_isolated() {
        let filter = FilterValue::Exact("false".into());
        assert!(user("cat", &[], false).field_matches("active", &filter));
        assert!(!user("dan", &[], true).field_matches("active", &filter));
    }
}
