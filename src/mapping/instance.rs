//! Instance-level composition of the mappers

use super::accelerator::{expand_guest_accelerators, flatten_guest_accelerators};
use super::context::{get_project, get_zone};
use super::network_interface::{expand_network_interfaces, flatten_network_interfaces};
use super::resolver::SubnetworkLookup;
use super::scheduling::{expand_scheduling, flatten_scheduling};
use super::service_account::{expand_service_accounts, flatten_service_accounts};
use super::tags::{flatten_tags, resource_instance_tags};
use super::MappingError;
use crate::compute::Instance;
use crate::config::ProviderConfig;
use crate::schema::{InstanceConfig, InstanceState};

/// Build the instance request for a declared configuration
pub async fn expand_instance<L: SubnetworkLookup>(
    config: &InstanceConfig,
    provider: &ProviderConfig,
    lookup: &L,
) -> Result<Instance, MappingError> {
    let network_interfaces = expand_network_interfaces(config, provider, lookup).await?;

    // Accelerator types are zonal, so only require a zone when there are any
    let guest_accelerators = if config.guest_accelerator.is_empty() {
        Vec::new()
    } else {
        let project = get_project(config, provider)?;
        let zone = get_zone(config, provider)?;
        expand_guest_accelerators(&config.guest_accelerator, &project, &zone)
    };

    let instance = Instance {
        name: config.name.clone().unwrap_or_default(),
        network_interfaces,
        scheduling: Some(expand_scheduling(config.scheduling.as_ref())),
        service_accounts: expand_service_accounts(&config.service_account),
        tags: resource_instance_tags(config),
        guest_accelerators,
    };

    tracing::debug!(
        "Expanded instance {} with {} network interfaces",
        instance.name,
        instance.network_interfaces.len()
    );

    Ok(instance)
}

/// Flatten an instance read from the API into state
pub fn flatten_instance(instance: &Instance) -> InstanceState {
    let interfaces = flatten_network_interfaces(&instance.network_interfaces);
    let (tags, tags_fingerprint) = flatten_tags(instance.tags.as_ref());

    InstanceState {
        name: instance.name.clone(),
        network_interface: interfaces.interfaces,
        region: interfaces.region,
        internal_ip: interfaces.internal_ip,
        external_ip: interfaces.external_ip,
        scheduling: instance.scheduling.as_ref().map(flatten_scheduling),
        service_account: flatten_service_accounts(&instance.service_accounts),
        tags,
        tags_fingerprint,
        guest_accelerator: flatten_guest_accelerators(&instance.guest_accelerators),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{NetworkInterface, Scheduling, Tags};
    use crate::mapping::SelfLinksOnly;
    use crate::schema::{
        AccessConfigBlock, GuestAcceleratorBlock, NetworkInterfaceBlock, SchedulingBlock,
        ServiceAccountBlock,
    };

    fn config() -> InstanceConfig {
        InstanceConfig {
            name: Some("web-1".to_string()),
            project: Some("my-project".to_string()),
            zone: Some("us-central1-a".to_string()),
            network_interface: vec![NetworkInterfaceBlock {
                subnetwork: Some(
                    "projects/my-project/regions/us-central1/subnetworks/web".to_string(),
                ),
                access_config: vec![AccessConfigBlock::default()],
                ..Default::default()
            }],
            scheduling: Some(SchedulingBlock {
                on_host_maintenance: Some("MIGRATE".to_string()),
                preemptible: false,
                automatic_restart: Some(true),
            }),
            service_account: vec![ServiceAccountBlock {
                email: None,
                scopes: ["cloud-platform".to_string()].into_iter().collect(),
            }],
            tags: Some(["web".to_string()].into_iter().collect()),
            tags_fingerprint: None,
            guest_accelerator: vec![GuestAcceleratorBlock {
                count: 1,
                accelerator_type: "nvidia-tesla-t4".to_string(),
            }],
            region: None,
        }
    }

    #[test]
    fn test_expand_instance() {
        let instance = tokio_test::block_on(expand_instance(
            &config(),
            &ProviderConfig::default(),
            &SelfLinksOnly,
        ))
        .unwrap();

        assert_eq!(instance.name, "web-1");
        assert_eq!(instance.network_interfaces.len(), 1);
        assert_eq!(
            instance.scheduling.as_ref().unwrap().automatic_restart,
            Some(true)
        );
        assert_eq!(instance.service_accounts[0].email, "default");
        assert_eq!(instance.tags.as_ref().unwrap().items, vec!["web".to_string()]);
        assert_eq!(
            instance.guest_accelerators[0].accelerator_type,
            "projects/my-project/zones/us-central1-a/acceleratorTypes/nvidia-tesla-t4"
        );
    }

    #[test]
    fn test_flatten_instance() {
        let instance = Instance {
            name: "web-1".to_string(),
            network_interfaces: vec![NetworkInterface {
                name: "nic0".to_string(),
                subnetwork: "projects/my-project/regions/us-central1/subnetworks/web".to_string(),
                network_ip: "10.0.0.4".to_string(),
                ..Default::default()
            }],
            scheduling: Some(Scheduling {
                on_host_maintenance: "MIGRATE".to_string(),
                preemptible: false,
                automatic_restart: Some(true),
            }),
            tags: Some(Tags {
                items: vec!["web".to_string()],
                fingerprint: "fp=".to_string(),
            }),
            ..Default::default()
        };

        let state = flatten_instance(&instance);
        assert_eq!(state.name, "web-1");
        assert_eq!(state.region, "us-central1");
        assert_eq!(state.internal_ip, "10.0.0.4");
        assert_eq!(state.external_ip, "");
        assert_eq!(state.scheduling.unwrap().automatic_restart, Some(true));
        assert_eq!(state.tags_fingerprint, "fp=");
        assert!(state.service_account.is_empty());
    }

    #[test]
    fn test_flatten_instance_without_scheduling() {
        let state = flatten_instance(&Instance::default());
        assert!(state.scheduling.is_none());
        assert!(state.tags.is_empty());
    }
}
