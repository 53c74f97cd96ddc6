//! gcemap
//!
//! Expand declared Compute Engine instance configuration into Compute API
//! request objects, and flatten API objects back into persisted state.
//!
//! # Module Structure
//!
//! - [`compute`] - Compute API (beta) wire objects
//! - [`schema`] - Declared configuration blocks and persisted state records
//! - [`mapping`] - The expand/flatten functions between the two
//! - [`config`] - Provider-level defaults (project, region, zone, endpoint)
//! - [`gcp`] - Authenticated Compute API client used to resolve subnetworks

pub mod compute;
pub mod config;
pub mod gcp;
pub mod mapping;
pub mod schema;

pub use config::ProviderConfig;
pub use mapping::MappingError;
