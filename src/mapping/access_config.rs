//! Access config mapper

use crate::compute::{AccessConfig, ONE_TO_ONE_NAT};
use crate::schema::{AccessConfigBlock, AccessConfigState};

/// Flatten access configs, also returning the first NAT IP found.
///
/// The NAT IP is written under both `nat_ip` and its legacy alias
/// `assigned_nat_ip`. The returned external IP is empty when no access
/// config carries one.
pub fn flatten_access_configs(configs: &[AccessConfig]) -> (Vec<AccessConfigState>, String) {
    let external_ip = configs
        .iter()
        .map(|ac| ac.nat_ip.as_str())
        .find(|ip| !ip.is_empty())
        .unwrap_or_default()
        .to_string();

    let flattened = configs
        .iter()
        .map(|ac| AccessConfigState {
            nat_ip: ac.nat_ip.clone(),
            assigned_nat_ip: ac.nat_ip.clone(),
        })
        .collect();

    (flattened, external_ip)
}

pub fn expand_access_configs(blocks: &[AccessConfigBlock]) -> Vec<AccessConfig> {
    blocks
        .iter()
        .map(|block| AccessConfig {
            kind: ONE_TO_ONE_NAT.to_string(),
            nat_ip: block.nat_ip.clone().unwrap_or_default(),
            ..Default::default()
        })
        .collect()
}
