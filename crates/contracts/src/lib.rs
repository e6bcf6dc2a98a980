//! Data contracts shared with the backend REST service.
//!
//! Entities here are transient, renderable copies of backend-owned records:
//! opaque string ids, camelCase JSON, `createdAt`/`updatedAt` timestamps.

pub mod domain;
pub mod shared;
pub mod system;
