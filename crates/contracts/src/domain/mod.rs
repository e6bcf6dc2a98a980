pub mod blog;
pub mod comment;
pub mod common;
pub mod event;
pub mod forum;
pub mod note;
pub mod revision;
pub mod shortlink;

pub use common::Visibility;
pub use revision::Revision;
