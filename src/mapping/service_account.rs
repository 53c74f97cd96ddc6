//! Service account mapper

use super::scopes::ScopeSet;
use crate::compute::ServiceAccount;
use crate::schema::config::non_empty;
use crate::schema::{ServiceAccountBlock, ServiceAccountState};

/// Email the API substitutes with the project's default compute account
pub const DEFAULT_SERVICE_ACCOUNT: &str = "default";

pub fn flatten_service_accounts(accounts: &[ServiceAccount]) -> Vec<ServiceAccountState> {
    accounts
        .iter()
        .map(|account| ServiceAccountState {
            email: account.email.clone(),
            scopes: account.scopes.iter().collect::<ScopeSet>(),
        })
        .collect()
}

/// Build service accounts with canonical scope URLs. An empty email
/// selects the default compute service account.
pub fn expand_service_accounts(blocks: &[ServiceAccountBlock]) -> Vec<ServiceAccount> {
    blocks
        .iter()
        .map(|block| ServiceAccount {
            email: non_empty(&block.email)
                .unwrap_or(DEFAULT_SERVICE_ACCOUNT)
                .to_string(),
            scopes: block.scopes.iter().map(str::to_string).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scopes(values: &[&str]) -> ScopeSet {
        values.iter().collect()
    }

    #[test]
    fn test_expand_defaults_email() {
        let accounts = expand_service_accounts(&[
            ServiceAccountBlock {
                email: None,
                scopes: scopes(&["compute-ro"]),
            },
            ServiceAccountBlock {
                email: Some(String::new()),
                scopes: ScopeSet::default(),
            },
        ]);
        assert_eq!(accounts[0].email, "default");
        assert_eq!(accounts[1].email, "default");
        assert_eq!(
            accounts[0].scopes,
            vec!["https://www.googleapis.com/auth/compute.readonly".to_string()]
        );
    }

    #[test]
    fn test_expand_keeps_email_and_full_scopes() {
        let accounts = expand_service_accounts(&[ServiceAccountBlock {
            email: Some("runner@my-project.iam.gserviceaccount.com".to_string()),
            scopes: scopes(&["https://www.googleapis.com/auth/cloud-platform"]),
        }]);
        assert_eq!(accounts[0].email, "runner@my-project.iam.gserviceaccount.com");
        assert_eq!(
            accounts[0].scopes,
            vec!["https://www.googleapis.com/auth/cloud-platform".to_string()]
        );
    }

    #[test]
    fn test_expand_alias_and_url_are_one_scope() {
        let accounts = expand_service_accounts(&[ServiceAccountBlock {
            email: None,
            scopes: scopes(&[
                "compute-ro",
                "https://www.googleapis.com/auth/compute.readonly",
            ]),
        }]);
        assert_eq!(
            accounts[0].scopes,
            vec!["https://www.googleapis.com/auth/compute.readonly".to_string()]
        );
    }

    #[test]
    fn test_declared_scopes_deserialize_deduplicated() {
        let block: ServiceAccountBlock = serde_yaml::from_str(
            "scopes: [compute-ro, 'https://www.googleapis.com/auth/compute.readonly', storage-ro]",
        )
        .unwrap();
        assert_eq!(block.scopes.len(), 2);
        assert_eq!(expand_service_accounts(&[block])[0].scopes.len(), 2);
    }

    #[test]
    fn test_flatten_deduplicates_scopes() {
        let state = flatten_service_accounts(&[ServiceAccount {
            email: "default".to_string(),
            scopes: vec![
                "https://www.googleapis.com/auth/devstorage.read_only".to_string(),
                "storage-ro".to_string(),
                "https://www.googleapis.com/auth/logging.write".to_string(),
            ],
        }]);
        assert_eq!(state.len(), 1);
        assert_eq!(state[0].email, "default");
        assert_eq!(state[0].scopes.len(), 2);
        assert!(state[0].scopes.contains("logging-write"));
    }
}
