//! Network tags

use crate::compute::Tags;
use crate::schema::InstanceConfig;

/// Tags to send for an instance.
///
/// Returns `None` when no `tags` value is configured at all, and `Some` with
/// zero items for an explicitly empty set.
pub fn resource_instance_tags(config: &InstanceConfig) -> Option<Tags> {
    let items = config.tags.as_ref()?;
    Some(Tags {
        items: items.iter().cloned().collect(),
        fingerprint: config.tags_fingerprint.clone().unwrap_or_default(),
    })
}

/// Tag items and fingerprint for state; both empty when the API sent none.
pub fn flatten_tags(tags: Option<&Tags>) -> (Vec<String>, String) {
    match tags {
        Some(tags) => (tags.items.clone(), tags.fingerprint.clone()),
        None => (Vec::new(), String::new()),
    }
}
