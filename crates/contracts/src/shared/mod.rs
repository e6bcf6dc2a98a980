pub mod api;

pub use api::Envelope;
