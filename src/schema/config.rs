//! Declared Configuration
//!
//! Typed blocks of the instance resource schema. Unknown fields are
//! rejected so that typos surface when the file is loaded instead of being
//! silently ignored by the mappers.

use crate::mapping::scopes::ScopeSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// `alias_ip_range` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasIpRangeBlock {
    pub ip_cidr_range: String,
    #[serde(default)]
    pub subnetwork_range_name: Option<String>,
}

/// `access_config` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessConfigBlock {
    /// Static external IP; the API allocates an ephemeral one when unset
    #[serde(default)]
    pub nat_ip: Option<String>,
}

/// `network_interface` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkInterfaceBlock {
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub subnetwork: Option<String>,
    /// Project owning the subnetwork, for shared VPC setups
    #[serde(default)]
    pub subnetwork_project: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Deprecated, use `address`
    #[serde(default)]
    pub network_ip: Option<String>,
    #[serde(default)]
    pub access_config: Vec<AccessConfigBlock>,
    #[serde(default)]
    pub alias_ip_range: Vec<AliasIpRangeBlock>,
}

/// `scheduling` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulingBlock {
    #[serde(default)]
    pub on_host_maintenance: Option<String>,
    #[serde(default)]
    pub preemptible: bool,
    #[serde(default)]
    pub automatic_restart: Option<bool>,
}

/// `service_account` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceAccountBlock {
    #[serde(default)]
    pub email: Option<String>,
    /// Scope aliases (`compute-ro`) or full scope URLs, keyed by canonical URL
    pub scopes: ScopeSet,
}

/// `guest_accelerator` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuestAcceleratorBlock {
    pub count: i64,
    #[serde(rename = "type")]
    pub accelerator_type: String,
}

/// Declared configuration of one instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub network_interface: Vec<NetworkInterfaceBlock>,
    #[serde(default)]
    pub scheduling: Option<SchedulingBlock>,
    #[serde(default)]
    pub service_account: Vec<ServiceAccountBlock>,
    /// `None` and an empty set are different: only the latter clears tags
    #[serde(default)]
    pub tags: Option<BTreeSet<String>>,
    #[serde(default)]
    pub tags_fingerprint: Option<String>,
    #[serde(default)]
    pub guest_accelerator: Vec<GuestAcceleratorBlock>,
}

/// Treat empty strings the same as unset values
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
