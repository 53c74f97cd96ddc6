//! Mapping errors

use thiserror::Error;

/// Failures while expanding declared configuration.
///
/// Flattening never fails; unparseable API values degrade to empty strings.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("network_interface.{index}: exactly one of network or subnetwork must be provided")]
    NetworkOrSubnetwork { index: usize },

    #[error("cannot determine selflink for network '{network}': {reason}")]
    NetworkLink { network: String, reason: String },

    #[error("cannot determine selflink for subnetwork '{subnetwork}'")]
    SubnetworkLink {
        subnetwork: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{field}: required field is not set")]
    MissingField { field: &'static str },
}
