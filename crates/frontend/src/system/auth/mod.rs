pub mod api;
pub mod guard;

pub use guard::AdminGate;
