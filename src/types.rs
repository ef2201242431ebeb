//! Re-exported types from external crates for convenience.
//!
//! These types appear in model fields and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Date and time types for timestamps in API requests and responses.
pub use chrono::{DateTime, Utc};
/// Untyped JSON, used for free-form map fields.
pub use serde_json::{Map, Value};
