pub mod admin;
pub mod shell;

pub use admin::AdminLayout;
pub use shell::SiteShell;
