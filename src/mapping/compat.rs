//! Deprecated schema fields
//!
//! Renamed fields are reconciled here, at the configuration boundary, so
//! the mappers only ever see the current field.

use crate::schema::config::non_empty;

/// Resolve the interface IP from `address` and its deprecated predecessor
/// `network_ip`. `address` wins when both are set.
pub fn resolve_network_ip(address: &Option<String>, network_ip: &Option<String>) -> String {
    match (non_empty(address), non_empty(network_ip)) {
        (Some(address), Some(legacy)) => {
            if address != legacy {
                tracing::debug!(
                    "Both address ({}) and deprecated network_ip ({}) set, using address",
                    address,
                    legacy
                );
            }
            address.to_string()
        }
        (Some(address), None) => address.to_string(),
        (None, Some(legacy)) => legacy.to_string(),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_address_wins_over_network_ip() {
        assert_eq!(resolve_network_ip(&some("10.0.0.5"), &some("10.0.0.9")), "10.0.0.5");
    }

    #[test]
    fn test_network_ip_used_alone() {
        assert_eq!(resolve_network_ip(&None, &some("10.0.0.9")), "10.0.0.9");
        assert_eq!(resolve_network_ip(&some(""), &some("10.0.0.9")), "10.0.0.9");
    }

    #[test]
    fn test_neither_set() {
        assert_eq!(resolve_network_ip(&None, &None), "");
    }
}
