//! Configuration Management
//!
//! Provider-level defaults used when a resource doesn't declare its own
//! project, region or zone, read from a JSON file in the gcemap config directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Compute API base used when no endpoint override is configured
pub const DEFAULT_COMPUTE_ENDPOINT: &str = "https://compute.googleapis.com/compute/beta/";

/// Provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Default project for resources without one
    #[serde(default)]
    pub project: Option<String>,
    /// Default region for resources without one
    #[serde(default)]
    pub region: Option<String>,
    /// Default zone for resources without one
    #[serde(default)]
    pub zone: Option<String>,
    /// Override for the Compute API base URL
    #[serde(default)]
    pub compute_endpoint: Option<String>,
    /// OAuth access token used instead of Application Default Credentials
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,
}

impl ProviderConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gcemap").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Fill unset fields from the environment and gcloud configuration
    pub fn with_environment_defaults(mut self) -> Self {
        if self.project.is_none() {
            self.project = crate::gcp::auth::get_default_project();
        }
        if self.region.is_none() {
            self.region = crate::gcp::auth::get_default_region();
        }
        if self.zone.is_none() {
            self.zone = crate::gcp::auth::get_default_zone();
        }
        if self.access_token.is_none() {
            self.access_token = std::env::var("GOOGLE_OAUTH_ACCESS_TOKEN")
                .ok()
                .filter(|t| !t.is_empty());
        }
        self
    }

    /// Apply command-line overrides (CLI > config file > environment)
    pub fn with_overrides(
        mut self,
        project: Option<String>,
        region: Option<String>,
        zone: Option<String>,
    ) -> Self {
        if project.is_some() {
            self.project = project;
        }
        if region.is_some() {
            self.region = region;
        }
        if zone.is_some() {
            self.zone = zone;
        }
        self
    }

    /// Get the effective Compute API endpoint
    pub fn compute_endpoint(&self) -> &str {
        self.compute_endpoint
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_COMPUTE_ENDPOINT)
    }
}

/// Get the region a zone belongs to (`us-central1-a` -> `us-central1`)
pub fn region_from_zone(zone: &str) -> String {
    let parts: Vec<&str> = zone.rsplitn(2, '-').collect();
    if parts.len() == 2 {
        parts[1].to_string()
    } else {
        zone.to_string()
    }
}
