//! Project, region and zone resolution
//!
//! A resource's own value wins; otherwise the provider default applies.

use super::MappingError;
use crate::config::{region_from_zone, ProviderConfig};
use crate::schema::config::non_empty;
use crate::schema::InstanceConfig;

pub fn get_project(
    config: &InstanceConfig,
    provider: &ProviderConfig,
) -> Result<String, MappingError> {
    non_empty(&config.project)
        .or_else(|| non_empty(&provider.project))
        .map(str::to_string)
        .ok_or(MappingError::MissingField { field: "project" })
}

/// Resolve the region: resource region, then the region of the resource's
/// zone, then the provider region, then the region of the provider zone.
pub fn get_region(
    config: &InstanceConfig,
    provider: &ProviderConfig,
) -> Result<String, MappingError> {
    if let Some(region) = non_empty(&config.region) {
        return Ok(region.to_string());
    }
    if let Some(zone) = non_empty(&config.zone) {
        return Ok(region_from_zone(zone));
    }
    if let Some(region) = non_empty(&provider.region) {
        return Ok(region.to_string());
    }
    non_empty(&provider.zone)
        .map(region_from_zone)
        .ok_or(MappingError::MissingField { field: "region" })
}

pub fn get_zone(config: &InstanceConfig, provider: &ProviderConfig) -> Result<String, MappingError> {
    non_empty(&config.zone)
        .or_else(|| non_empty(&provider.zone))
        .map(str::to_string)
        .ok_or(MappingError::MissingField { field: "zone" })
}
