pub mod confirm_dialog;
pub mod forms;
pub mod pagination_controls;
pub mod revisions;
pub mod search_input;
pub mod unsaved;

pub use confirm_dialog::ConfirmDialog;
pub use pagination_controls::PaginationControls;
pub use revisions::RevisionList;
pub use search_input::SearchInput;
pub use unsaved::{confirm_discard, use_unsaved_guard};
