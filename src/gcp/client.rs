//! GCP Client
//!
//! Compute API client combining authentication and HTTP functionality.
//! Only reads are needed: the client resolves subnetwork names to self
//! links for the network interface mapper.

use super::auth::GcpCredentials;
use super::http::GcpHttpClient;
use crate::config::ProviderConfig;
use crate::mapping::SubnetworkLookup;
use anyhow::{Context, Result};
use serde_json::Value;
use url::Url;

/// Where access tokens come from
#[derive(Clone)]
enum TokenSource {
    /// Application Default Credentials
    Adc(GcpCredentials),
    /// Pre-issued OAuth access token
    Static(String),
}

/// Main GCP client
#[derive(Clone)]
pub struct GcpClient {
    tokens: TokenSource,
    http: GcpHttpClient,
    endpoint: Url,
}

impl GcpClient {
    /// Create a client for the configured endpoint, using the configured
    /// access token or Application Default Credentials
    pub async fn new(config: &ProviderConfig) -> Result<Self> {
        if let Some(token) = config.access_token.as_deref().filter(|t| !t.is_empty()) {
            return Self::with_access_token(config.compute_endpoint(), token);
        }

        let credentials = GcpCredentials::new()
            .await
            .context("Failed to initialize GCP credentials")?;

        Ok(Self {
            tokens: TokenSource::Adc(credentials),
            http: GcpHttpClient::new()?,
            endpoint: parse_endpoint(config.compute_endpoint())?,
        })
    }

    /// Create a client authenticating with a fixed access token
    pub fn with_access_token(endpoint: &str, token: &str) -> Result<Self> {
        Ok(Self {
            tokens: TokenSource::Static(token.to_string()),
            http: GcpHttpClient::new()?,
            endpoint: parse_endpoint(endpoint)?,
        })
    }

    /// Get the current access token
    pub async fn get_token(&self) -> Result<String> {
        match &self.tokens {
            TokenSource::Adc(credentials) => credentials.get_token().await,
            TokenSource::Static(token) => Ok(token.clone()),
        }
    }

    /// Make a GET request to a GCP API
    pub async fn get(&self, url: &str) -> Result<Value> {
        let token = self.get_token().await?;
        self.http.get(url, &token).await
    }

    // =========================================================================
    // Compute Engine API helpers
    // =========================================================================

    /// Build Compute Engine API URL
    pub fn compute_url(&self, project: &str, path: &str) -> Result<String> {
        let relative = format!("projects/{}/{}", urlencoding::encode(project), path);
        let url = self
            .endpoint
            .join(&relative)
            .with_context(|| format!("Invalid compute API path: {}", relative))?;
        Ok(url.to_string())
    }

    /// Build regional Compute Engine API URL
    pub fn compute_regional_url(&self, project: &str, region: &str, resource: &str) -> Result<String> {
        self.compute_url(
            project,
            &format!("regions/{}/{}", urlencoding::encode(region), resource),
        )
    }
}

impl SubnetworkLookup for GcpClient {
    async fn subnetwork_self_link(&self, project: &str, region: &str, name: &str) -> Result<String> {
        let url = self.compute_regional_url(
            project,
            region,
            &format!("subnetworks/{}", urlencoding::encode(name)),
        )?;
        let subnetwork = self.get(&url).await?;

        subnetwork
            .get("selfLink")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("Subnetwork response has no selfLink"))
    }
}

/// The endpoint is a base URL; relative joins need the trailing slash
fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let endpoint = if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{}/", endpoint)
    };
    Url::parse(&endpoint).with_context(|| format!("Invalid compute endpoint: {}", endpoint))
}

/// Format a GCP API error for display
pub fn format_gcp_error(error: &anyhow::Error) -> String {
    super::http::format_gcp_error(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_regional_url() {
        let client =
            GcpClient::with_access_token("https://compute.googleapis.com/compute/beta", "t").unwrap();
        assert_eq!(
            client
                .compute_regional_url("my-project", "us-central1", "subnetworks/app")
                .unwrap(),
            "https://compute.googleapis.com/compute/beta/projects/my-project/regions/us-central1/subnetworks/app"
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(GcpClient::with_access_token("not a url", "t").is_err());
    }

    #[test]
    fn test_static_token() {
        let client = GcpClient::with_access_token("http://localhost:1/", "abc").unwrap();
        let token = tokio_test::block_on(client.get_token()).unwrap();
        assert_eq!(token, "abc");
    }
}
