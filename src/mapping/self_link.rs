//! Resource link parsing
//!
//! Compute resources reference each other by self link, either as a full
//! URL (`https://www.googleapis.com/compute/beta/projects/...`) or as the
//! relative `projects/...` path. Only the suffix is matched, so both forms
//! are accepted.

use super::MappingError;
use regex::Regex;
use std::sync::OnceLock;

const PROJECT_PATTERN: &str = r"(?:(?:[-a-z0-9]{1,63}\.)*(?:[a-z](?:[-a-z0-9]{0,61}[a-z0-9])?):)?(?:[0-9]{1,19}|(?:[a-z0-9](?:[-a-z0-9]{0,61}[a-z0-9])?))";
const REGION_PATTERN: &str = r"[a-z](?:[-a-z0-9]{0,61}[a-z0-9])?";
const SUBNETWORK_PATTERN: &str = r"[a-z](?:[-a-z0-9]{0,61}[a-z0-9])?";

static SUBNETWORK_LINK: OnceLock<Regex> = OnceLock::new();
static NETWORK_LINK: OnceLock<Regex> = OnceLock::new();

fn subnetwork_link_regex() -> &'static Regex {
    SUBNETWORK_LINK.get_or_init(|| {
        let pattern = format!(
            "projects/({PROJECT_PATTERN})/regions/({REGION_PATTERN})/subnetworks/({SUBNETWORK_PATTERN})$"
        );
        Regex::new(&pattern)
            .unwrap_or_else(|e| panic!("Invalid subnetwork link pattern: {}", e))
    })
}

fn network_link_regex() -> &'static Regex {
    NETWORK_LINK.get_or_init(|| {
        Regex::new(r"projects/([^/]+)/global/networks/([^/]+)$")
            .unwrap_or_else(|e| panic!("Invalid network link pattern: {}", e))
    })
}

/// Components of a subnetwork self link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetworkLink {
    pub project: String,
    pub region: String,
    pub name: String,
}

impl SubnetworkLink {
    pub fn relative_link(&self) -> String {
        format!(
            "projects/{}/regions/{}/subnetworks/{}",
            self.project, self.region, self.name
        )
    }
}

pub fn parse_subnetwork_link(link: &str) -> Option<SubnetworkLink> {
    let captures = subnetwork_link_regex().captures(link)?;
    Some(SubnetworkLink {
        project: captures[1].to_string(),
        region: captures[2].to_string(),
        name: captures[3].to_string(),
    })
}

/// Project and region of a subnetwork link, or two empty strings when the
/// link doesn't parse.
///
/// State readers treat empty as "not applicable", so an unrecognized link is
/// not an error.
pub fn project_and_region_from_subnetwork_link(link: &str) -> (String, String) {
    match parse_subnetwork_link(link) {
        Some(parsed) => (parsed.project, parsed.region),
        None => {
            if !link.is_empty() {
                tracing::debug!("Unrecognized subnetwork link: {}", link);
            }
            (String::new(), String::new())
        }
    }
}

/// A reference to a global resource, resolved against a default project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalFieldValue {
    pub project: String,
    pub name: String,
}

impl GlobalFieldValue {
    /// `projects/{project}/global/networks/{name}`, or empty for an unset
    /// reference
    pub fn relative_link(&self) -> String {
        if self.name.is_empty() {
            return String::new();
        }
        format!("projects/{}/global/networks/{}", self.project, self.name)
    }
}

/// Parse a network reference given as a bare name, relative link or URL.
///
/// Bare names belong to `project`. An empty value is a valid unset
/// reference.
pub fn parse_network_field_value(
    value: &str,
    project: &str,
) -> Result<GlobalFieldValue, MappingError> {
    if value.is_empty() {
        return Ok(GlobalFieldValue::default());
    }

    if let Some(captures) = network_link_regex().captures(value) {
        return Ok(GlobalFieldValue {
            project: captures[1].to_string(),
            name: captures[2].to_string(),
        });
    }

    if value.contains('/') {
        return Err(MappingError::NetworkLink {
            network: value.to_string(),
            reason: "expected format 'projects/{project}/global/networks/{name}'".to_string(),
        });
    }

    Ok(GlobalFieldValue {
        project: project.to_string(),
        name: value.to_string(),
    })
}
