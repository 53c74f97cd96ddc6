//! Alias IP range mapper

use crate::compute::AliasIpRange;
use crate::schema::{AliasIpRangeBlock, AliasIpRangeState};

pub fn expand_alias_ip_ranges(blocks: &[AliasIpRangeBlock]) -> Vec<AliasIpRange> {
    blocks
        .iter()
        .map(|block| AliasIpRange {
            ip_cidr_range: block.ip_cidr_range.clone(),
            subnetwork_range_name: block.subnetwork_range_name.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn flatten_alias_ip_ranges(ranges: &[AliasIpRange]) -> Vec<AliasIpRangeState> {
    ranges
        .iter()
        .map(|range| AliasIpRangeState {
            ip_cidr_range: range.ip_cidr_range.clone(),
            subnetwork_range_name: range.subnetwork_range_name.clone(),
        })
        .collect()
}
