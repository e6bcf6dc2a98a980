//! Public pages and the admin landing page. These are thin read-only
//! consumers of the same API helpers the admin lists use.

pub mod admin_home;
pub mod blog;
pub mod forum;
pub mod home;
pub mod information;
pub mod not_found;
pub mod profile;
