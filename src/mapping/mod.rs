//! Expand and flatten mappers
//!
//! Each submodule handles one sub-object of the instance resource. Expand
//! builds API objects from declared configuration; flatten turns API
//! objects into persisted state. Apart from subnetwork resolution, all of
//! them are pure functions.
//!
//! # Example
//!
//! ```ignore
//! use gcemap::mapping::{expand_instance, flatten_instance, SelfLinksOnly};
//!
//! async fn example(config: &gcemap::schema::InstanceConfig) -> anyhow::Result<()> {
//!     let provider = gcemap::ProviderConfig::default();
//!     let instance = expand_instance(config, &provider, &SelfLinksOnly).await?;
//!     let state = flatten_instance(&instance);
//!     Ok(())
//! }
//! ```

pub mod access_config;
pub mod accelerator;
pub mod alias_ip;
pub mod compat;
pub mod context;
mod error;
pub mod instance;
pub mod network_interface;
pub mod resolver;
pub mod scheduling;
pub mod scopes;
pub mod self_link;
pub mod service_account;
pub mod tags;

pub use access_config::{expand_access_configs, flatten_access_configs};
pub use accelerator::{expand_guest_accelerators, flatten_guest_accelerators};
pub use alias_ip::{expand_alias_ip_ranges, flatten_alias_ip_ranges};
pub use context::{get_project, get_region, get_zone};
pub use error::MappingError;
pub use instance::{expand_instance, flatten_instance};
pub use network_interface::{
    expand_network_interfaces, flatten_network_interfaces, FlattenedNetworkInterfaces,
};
pub use resolver::{resolve_subnetwork_link, SelfLinksOnly, SubnetworkLookup};
pub use scheduling::{expand_scheduling, flatten_scheduling};
pub use scopes::{canonicalize_service_scope, canonicalize_service_scopes, ScopeSet};
pub use self_link::{
    parse_network_field_value, parse_subnetwork_link, project_and_region_from_subnetwork_link,
};
pub use service_account::{expand_service_accounts, flatten_service_accounts};
pub use tags::{flatten_tags, resource_instance_tags};
