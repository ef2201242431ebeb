//! Event related models shared with other resources.
//!
//! Event endpoints themselves are not exposed by this crate.

pub mod types;
