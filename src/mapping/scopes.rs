//! OAuth scope canonicalization
//!
//! Service account scopes can be declared with the short aliases gcloud
//! understands. The API always reports full scope URLs, so both sides are
//! compared in canonical form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Short scope aliases and the scope URL each one stands for
const SCOPE_ALIASES: &[(&str, &str)] = &[
    ("bigquery", "https://www.googleapis.com/auth/bigquery"),
    ("cloud-platform", "https://www.googleapis.com/auth/cloud-platform"),
    ("cloud-source-repos", "https://www.googleapis.com/auth/source.full_control"),
    ("cloud-source-repos-ro", "https://www.googleapis.com/auth/source.read_only"),
    ("compute-ro", "https://www.googleapis.com/auth/compute.readonly"),
    ("compute-rw", "https://www.googleapis.com/auth/compute"),
    ("datastore", "https://www.googleapis.com/auth/datastore"),
    ("logging-write", "https://www.googleapis.com/auth/logging.write"),
    ("monitoring", "https://www.googleapis.com/auth/monitoring"),
    ("monitoring-write", "https://www.googleapis.com/auth/monitoring.write"),
    ("pubsub", "https://www.googleapis.com/auth/pubsub"),
    ("service-control", "https://www.googleapis.com/auth/servicecontrol"),
    ("service-management", "https://www.googleapis.com/auth/service.management.readonly"),
    ("sql", "https://www.googleapis.com/auth/sqlservice"),
    ("sql-admin", "https://www.googleapis.com/auth/sqlservice.admin"),
    ("storage-full", "https://www.googleapis.com/auth/devstorage.full_control"),
    ("storage-ro", "https://www.googleapis.com/auth/devstorage.read_only"),
    ("storage-rw", "https://www.googleapis.com/auth/devstorage.read_write"),
    ("taskqueue", "https://www.googleapis.com/auth/taskqueue"),
    ("trace-append", "https://www.googleapis.com/auth/trace.append"),
    ("trace-ro", "https://www.googleapis.com/auth/trace.readonly"),
    ("useraccounts-ro", "https://www.googleapis.com/auth/cloud.useraccounts.readonly"),
    ("useraccounts-rw", "https://www.googleapis.com/auth/cloud.useraccounts"),
    ("userinfo-email", "https://www.googleapis.com/auth/userinfo.email"),
];

/// Expand a scope alias to its URL. Anything else is returned unchanged.
pub fn canonicalize_service_scope(scope: &str) -> String {
    SCOPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == scope)
        .map(|(_, url)| url.to_string())
        .unwrap_or_else(|| scope.to_string())
}

pub fn canonicalize_service_scopes<I, S>(scopes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    scopes
        .into_iter()
        .map(|s| canonicalize_service_scope(s.as_ref()))
        .collect()
}

/// Deduplicated set of scopes, keyed by canonical form.
///
/// `compute-ro` and its full URL are the same member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ScopeSet(BTreeSet<String>);

impl ScopeSet {
    pub fn insert(&mut self, scope: &str) -> bool {
        self.0.insert(canonicalize_service_scope(scope))
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.0.contains(&canonicalize_service_scope(scope))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ScopeSet::default();
        for scope in iter {
            set.insert(scope.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for ScopeSet {
    fn from(scopes: Vec<String>) -> Self {
        scopes.into_iter().collect()
    }
}

impl From<ScopeSet> for Vec<String> {
    fn from(set: ScopeSet) -> Self {
        set.0.into_iter().collect()
    }
}
