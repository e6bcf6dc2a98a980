//! Shared inline styles for detail forms, so the entity forms stay
//! visually uniform without a CSS build step.

pub const FIELD_ROW: &str = "display: flex; flex-direction: column; gap: 4px; margin-bottom: 14px;";
pub const FIELD_LABEL: &str = "font-size: 13px; color: #555;";
pub const FIELD_INPUT: &str =
    "padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;";
pub const FIELD_TEXTAREA: &str = "padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; min-height: 160px; font-family: inherit; resize: vertical;";
pub const FIELD_CHECKBOX_ROW: &str =
    "display: flex; align-items: center; gap: 8px; margin-bottom: 14px; font-size: 14px;";
pub const FORM_ACTIONS: &str =
    "display: flex; gap: 10px; margin-top: 18px; padding-top: 14px; border-top: 1px solid #eee;";
