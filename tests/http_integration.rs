//! Integration tests for subnetwork lookups using wiremock
//!
//! These tests run the Compute API client against mocked endpoints, both
//! directly and through network interface expansion.

use gcemap::gcp::client::{format_gcp_error, GcpClient};
use gcemap::mapping::{expand_network_interfaces, MappingError, SubnetworkLookup};
use gcemap::schema::{InstanceConfig, NetworkInterfaceBlock};
use gcemap::ProviderConfig;
use serde_json::json;
use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUBNET_PATH: &str = "/compute/beta/projects/test-project/regions/us-central1/subnetworks/app";
const SUBNET_LINK: &str = "https://www.googleapis.com/compute/beta/projects/test-project/regions/us-central1/subnetworks/app";

fn client(server: &MockServer) -> GcpClient {
    GcpClient::with_access_token(&format!("{}/compute/beta/", server.uri()), "test-token")
        .expect("client should build")
}

fn provider(server: &MockServer) -> ProviderConfig {
    ProviderConfig {
        project: Some("test-project".to_string()),
        region: Some("us-central1".to_string()),
        compute_endpoint: Some(format!("{}/compute/beta/", server.uri())),
        access_token: Some("test-token".to_string()),
        ..Default::default()
    }
}

/// Test module for the subnetwork lookup
mod subnetwork_lookup_tests {
    use super::*;

    /// A successful GET returns the subnetwork's selfLink
    #[tokio::test]
    async fn test_lookup_returns_self_link() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SUBNET_PATH))
            .and(bearer_token("test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "compute#subnetwork",
                "name": "app",
                "ipCidrRange": "10.0.0.0/24",
                "selfLink": SUBNET_LINK
            })))
            .expect(1)
            .mount(&server)
            .await;

        let link = client(&server)
            .subnetwork_self_link("test-project", "us-central1", "app")
            .await
            .expect("lookup should succeed");

        assert_eq!(link, SUBNET_LINK);
    }

    /// A response without selfLink is an error
    #[tokio::test]
    async fn test_lookup_without_self_link_fails() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SUBNET_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "app"})))
            .mount(&server)
            .await;

        let err = client(&server)
            .subnetwork_self_link("test-project", "us-central1", "app")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("selfLink"));
    }

    /// 404 surfaces as a failed request with a friendly message
    #[tokio::test]
    async fn test_lookup_404() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SUBNET_PATH))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"code": 404, "message": "The resource was not found"}
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .subnetwork_self_link("test-project", "us-central1", "app")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("API request failed: 404"));
        assert_eq!(format_gcp_error(&err), "Resource not found.");
    }

    /// 403 maps to a permission message
    #[tokio::test]
    async fn test_lookup_403() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SUBNET_PATH))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = client(&server)
            .subnetwork_self_link("test-project", "us-central1", "app")
            .await
            .unwrap_err();

        assert_eq!(
            format_gcp_error(&err),
            "Permission denied. Check your GCP IAM permissions."
        );
    }
}

/// Test module for expansion backed by the HTTP lookup
mod expand_tests {
    use super::*;

    fn config(interfaces: Vec<NetworkInterfaceBlock>) -> InstanceConfig {
        InstanceConfig {
            network_interface: interfaces,
            ..Default::default()
        }
    }

    /// Bare subnetwork names are resolved through the API
    #[tokio::test]
    async fn test_expand_resolves_subnetwork_name() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SUBNET_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "selfLink": SUBNET_LINK
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider(&server);
        let client = GcpClient::new(&provider).await.expect("client should build");
        let ifaces = expand_network_interfaces(
            &config(vec![NetworkInterfaceBlock {
                subnetwork: Some("app".to_string()),
                ..Default::default()
            }]),
            &provider,
            &client,
        )
        .await
        .expect("expand should succeed");

        assert_eq!(ifaces[0].subnetwork, SUBNET_LINK);
        assert_eq!(ifaces[0].network, "");
    }

    /// Self links never reach the API
    #[tokio::test]
    async fn test_expand_self_link_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let provider = provider(&server);
        let client = GcpClient::new(&provider).await.expect("client should build");
        let ifaces = expand_network_interfaces(
            &config(vec![NetworkInterfaceBlock {
                subnetwork: Some(SUBNET_LINK.to_string()),
                ..Default::default()
            }]),
            &provider,
            &client,
        )
        .await
        .expect("expand should succeed");

        assert_eq!(ifaces[0].subnetwork, SUBNET_LINK);
    }

    /// Lookup failures are wrapped with the offending subnetwork
    #[tokio::test]
    async fn test_expand_lookup_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SUBNET_PATH))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let provider = provider(&server);
        let client = GcpClient::new(&provider).await.expect("client should build");
        let err = expand_network_interfaces(
            &config(vec![NetworkInterfaceBlock {
                subnetwork: Some("app".to_string()),
                ..Default::default()
            }]),
            &provider,
            &client,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, MappingError::SubnetworkLink { ref subnetwork, .. } if subnetwork == "app"));
        assert!(err
            .to_string()
            .starts_with("cannot determine selflink for subnetwork 'app'"));

        let err = anyhow::Error::from(err);
        assert_eq!(
            format_gcp_error(&err),
            "cannot determine selflink for subnetwork 'app': Resource not found."
        );
    }
}
