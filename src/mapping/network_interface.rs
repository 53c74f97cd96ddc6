//! Network interface mapper

use super::access_config::{expand_access_configs, flatten_access_configs};
use super::alias_ip::{expand_alias_ip_ranges, flatten_alias_ip_ranges};
use super::compat::resolve_network_ip;
use super::context::{get_project, get_region};
use super::resolver::{resolve_subnetwork_link, SubnetworkLookup};
use super::self_link::{parse_network_field_value, project_and_region_from_subnetwork_link};
use super::MappingError;
use crate::compute::NetworkInterface;
use crate::config::ProviderConfig;
use crate::schema::config::non_empty;
use crate::schema::{InstanceConfig, NetworkInterfaceState};

/// Flattened interfaces plus the addresses derived from them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedNetworkInterfaces {
    pub interfaces: Vec<NetworkInterfaceState>,
    /// Region of the last interface's subnetwork
    pub region: String,
    /// First non-empty interface IP
    pub internal_ip: String,
    /// NAT IP of the last interface's access configs
    pub external_ip: String,
}

/// Flatten network interfaces, one state record per interface in order.
///
/// Instance templates have no interface names, so `name` is only set when
/// the API returned one.
pub fn flatten_network_interfaces(interfaces: &[NetworkInterface]) -> FlattenedNetworkInterfaces {
    let mut flattened = FlattenedNetworkInterfaces {
        interfaces: Vec::with_capacity(interfaces.len()),
        ..Default::default()
    };

    for iface in interfaces {
        let (access_config, external_ip) = flatten_access_configs(&iface.access_configs);
        let (subnetwork_project, region) = project_and_region_from_subnetwork_link(&iface.subnetwork);

        flattened.external_ip = external_ip;
        flattened.region = region;
        if flattened.internal_ip.is_empty() {
            flattened.internal_ip = iface.network_ip.clone();
        }

        flattened.interfaces.push(NetworkInterfaceState {
            name: Some(iface.name.clone()).filter(|n| !n.is_empty()),
            address: iface.network_ip.clone(),
            network_ip: iface.network_ip.clone(),
            network: iface.network.clone(),
            subnetwork: iface.subnetwork.clone(),
            subnetwork_project,
            access_config,
            alias_ip_range: flatten_alias_ip_ranges(&iface.alias_ip_ranges),
        });
    }

    flattened
}

/// Build the network interfaces of an instance request.
///
/// Every interface needs exactly one of `network` or `subnetwork`. Bare
/// subnetwork names are resolved through `lookup`, in `subnetwork_project`
/// when one is given.
pub async fn expand_network_interfaces<L: SubnetworkLookup>(
    config: &InstanceConfig,
    provider: &ProviderConfig,
    lookup: &L,
) -> Result<Vec<NetworkInterface>, MappingError> {
    let project = get_project(config, provider)?;
    let region = get_region(config, provider)?;

    let mut interfaces = Vec::with_capacity(config.network_interface.len());
    for (index, block) in config.network_interface.iter().enumerate() {
        let network = non_empty(&block.network).unwrap_or_default();
        let subnetwork = non_empty(&block.subnetwork).unwrap_or_default();
        if network.is_empty() == subnetwork.is_empty() {
            return Err(MappingError::NetworkOrSubnetwork { index });
        }

        let network_field = parse_network_field_value(network, &project)?;

        let subnetwork_link = resolve_subnetwork_link(
            lookup,
            &project,
            &region,
            non_empty(&block.subnetwork_project),
            subnetwork,
        )
        .await
        .map_err(|e| MappingError::SubnetworkLink {
            subnetwork: subnetwork.to_string(),
            source: e.into(),
        })?;

        interfaces.push(NetworkInterface {
            name: String::new(),
            network: network_field.relative_link(),
            subnetwork: subnetwork_link,
            network_ip: resolve_network_ip(&block.address, &block.network_ip),
            access_configs: expand_access_configs(&block.access_config),
            alias_ip_ranges: expand_alias_ip_ranges(&block.alias_ip_range),
        });
    }

    Ok(interfaces)
}
