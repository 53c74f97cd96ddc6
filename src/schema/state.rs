//! Persisted State
//!
//! Records produced by the flatten mappers. Field names are the schema's,
//! including the deprecated aliases that older configurations still read.

use crate::mapping::scopes::ScopeSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasIpRangeState {
    pub ip_cidr_range: String,
    pub subnetwork_range_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfigState {
    pub nat_ip: String,
    /// Deprecated alias of `nat_ip`
    pub assigned_nat_ip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInterfaceState {
    /// Only instances have interface names; templates leave this out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub address: String,
    /// Deprecated alias of `address`
    pub network_ip: String,
    pub network: String,
    pub subnetwork: String,
    pub subnetwork_project: String,
    pub access_config: Vec<AccessConfigState>,
    pub alias_ip_range: Vec<AliasIpRangeState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingState {
    pub on_host_maintenance: String,
    pub preemptible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_restart: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccountState {
    pub email: String,
    pub scopes: ScopeSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestAcceleratorState {
    pub count: i64,
    #[serde(rename = "type")]
    pub accelerator_type: String,
}

/// Observed state of one instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceState {
    pub name: String,
    pub network_interface: Vec<NetworkInterfaceState>,
    pub region: String,
    pub internal_ip: String,
    pub external_ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduling: Option<SchedulingState>,
    pub service_account: Vec<ServiceAccountState>,
    pub tags: Vec<String>,
    pub tags_fingerprint: String,
    pub guest_accelerator: Vec<GuestAcceleratorState>,
}
