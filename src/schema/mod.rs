//! Resource schema types
//!
//! The instance resource's schema, split into what users declare and what
//! is persisted after reading the instance back.
//!
//! - [`config`] - Declared configuration, deserialized once at the boundary
//! - [`state`] - Observed state, serialized with the schema's field names

pub mod config;
pub mod state;

pub use config::*;
pub use state::*;
