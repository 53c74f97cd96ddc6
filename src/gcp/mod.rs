//! GCP API interaction module
//!
//! Authenticated access to the Compute Engine API, used to resolve
//! subnetwork names into self links while expanding network interfaces.
//!
//! # Module Structure
//!
//! - [`auth`] - Application Default Credentials and gcloud defaults
//! - [`client`] - Compute API client implementing subnetwork lookups
//! - [`http`] - HTTP utilities for REST API calls
//!
//! # Example
//!
//! ```ignore
//! use gcemap::gcp::client::GcpClient;
//! use gcemap::mapping::SubnetworkLookup;
//!
//! async fn example(config: &gcemap::ProviderConfig) -> anyhow::Result<()> {
//!     let client = GcpClient::new(config).await?;
//!     let link = client.subnetwork_self_link("my-project", "us-central1", "default").await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod http;
