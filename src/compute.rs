//! Compute API object model
//!
//! Wire-level structs for the parts of the Compute Engine (beta) instance
//! resource that gcemap maps. Field names follow the API's JSON; fields the
//! API omits deserialize to their zero value.

use serde::{Deserialize, Serialize};

/// The only access config type the API accepts for instance interfaces
pub const ONE_TO_ONE_NAT: &str = "ONE_TO_ONE_NAT";

/// External NAT mapping attached to a network interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(rename = "natIP", default, skip_serializing_if = "String::is_empty")]
    pub nat_ip: String,
}

/// Secondary IP range routed to an interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasIpRange {
    #[serde(default)]
    pub ip_cidr_range: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subnetwork_range_name: String,
}

/// Network interface of an instance or instance template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    /// Assigned by the API; always empty on instance templates
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub network: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subnetwork: String,
    #[serde(rename = "networkIP", default, skip_serializing_if = "String::is_empty")]
    pub network_ip: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access_configs: Vec<AccessConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alias_ip_ranges: Vec<AliasIpRange>,
}

/// Scheduling options of an instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheduling {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub on_host_maintenance: String,
    #[serde(default)]
    pub preemptible: bool,
    /// `None` leaves the API default in place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_restart: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccount {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceleratorConfig {
    #[serde(default)]
    pub accelerator_count: i64,
    #[serde(default)]
    pub accelerator_type: String,
}

/// Network tags plus the fingerprint required to update them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fingerprint: String,
}

/// The subset of the instance resource covered by the mappers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_interfaces: Vec<NetworkInterface>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduling: Option<Scheduling>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_accounts: Vec<ServiceAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guest_accelerators: Vec<AcceleratorConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_network_interface_uses_api_field_names() {
        let iface = NetworkInterface {
            network_ip: "10.0.0.2".to_string(),
            access_configs: vec![AccessConfig {
                kind: ONE_TO_ONE_NAT.to_string(),
                nat_ip: "35.1.2.3".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let value = serde_json::to_value(&iface).unwrap();
        assert_eq!(value["networkIP"], "10.0.0.2");
        assert_eq!(value["accessConfigs"][0]["natIP"], "35.1.2.3");
        assert_eq!(value["accessConfigs"][0]["type"], "ONE_TO_ONE_NAT");
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_instance_ignores_unknown_api_fields() {
        let instance: Instance = serde_json::from_value(json!({
            "name": "vm-1",
            "status": "RUNNING",
            "scheduling": {"onHostMaintenance": "MIGRATE", "preemptible": false},
            "networkInterfaces": [{"name": "nic0", "fingerprint": "abc="}]
        }))
        .unwrap();

        assert_eq!(instance.name, "vm-1");
        assert_eq!(instance.network_interfaces[0].name, "nic0");
        let scheduling = instance.scheduling.unwrap();
        assert_eq!(scheduling.automatic_restart, None);
        assert!(instance.tags.is_none());
    }
}
