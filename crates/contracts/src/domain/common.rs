use serde::{Deserialize, Serialize};

/// Who can see a record on the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Members,
    Draft,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Members => "members",
            Visibility::Draft => "draft",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Visibility::Public),
            "members" => Some(Visibility::Members),
            "draft" => Some(Visibility::Draft),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Members => "Members only",
            Visibility::Draft => "Draft",
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Draft
    }
}
