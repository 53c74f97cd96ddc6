//! Subnetwork resolution
//!
//! Declared subnetworks may be self links or bare names. Bare names are
//! looked up in the API to obtain the canonical self link.

use super::self_link::parse_subnetwork_link;
use anyhow::{Context, Result};

/// Looks up a subnetwork's self link by name.
///
/// Implemented by [`crate::gcp::client::GcpClient`]; tests supply their own.
#[allow(async_fn_in_trait)]
pub trait SubnetworkLookup {
    async fn subnetwork_self_link(&self, project: &str, region: &str, name: &str)
        -> Result<String>;
}

/// Lookup that never reaches the API. Only self links can be resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfLinksOnly;

impl SubnetworkLookup for SelfLinksOnly {
    async fn subnetwork_self_link(
        &self,
        _project: &str,
        _region: &str,
        name: &str,
    ) -> Result<String> {
        Err(anyhow::anyhow!(
            "'{}' is not a subnetwork self link and API lookups are disabled",
            name
        ))
    }
}

/// Resolve a declared subnetwork to its self link.
///
/// An empty subnetwork resolves to an empty link. Links are returned as-is;
/// bare names are looked up in `subnetwork_project`, falling back to
/// `project`.
pub async fn resolve_subnetwork_link<L: SubnetworkLookup>(
    lookup: &L,
    project: &str,
    region: &str,
    subnetwork_project: Option<&str>,
    subnetwork: &str,
) -> Result<String> {
    if subnetwork.is_empty() {
        return Ok(String::new());
    }

    if parse_subnetwork_link(subnetwork).is_some() {
        return Ok(subnetwork.to_string());
    }

    let project = subnetwork_project.unwrap_or(project);
    tracing::debug!(
        "Looking up subnetwork {} in project {}, region {}",
        subnetwork,
        project,
        region
    );

    lookup
        .subnetwork_self_link(project, region, subnetwork)
        .await
        .with_context(|| {
            format!(
                "Error referencing subnetwork '{}' in region '{}'",
                subnetwork, region
            )
        })
}
