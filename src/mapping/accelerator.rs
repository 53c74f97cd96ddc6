//! Guest accelerator mapper

use crate::compute::AcceleratorConfig;
use crate::schema::{GuestAcceleratorBlock, GuestAcceleratorState};

pub fn flatten_guest_accelerators(accelerators: &[AcceleratorConfig]) -> Vec<GuestAcceleratorState> {
    accelerators
        .iter()
        .map(|accelerator| GuestAcceleratorState {
            count: accelerator.accelerator_count,
            accelerator_type: accelerator.accelerator_type.clone(),
        })
        .collect()
}

/// Build accelerator configs for an instance in `zone`.
///
/// Blocks with a zero count are dropped. Bare type names are turned into
/// zonal accelerator type links.
pub fn expand_guest_accelerators(
    blocks: &[GuestAcceleratorBlock],
    project: &str,
    zone: &str,
) -> Vec<AcceleratorConfig> {
    blocks
        .iter()
        .filter(|block| block.count > 0)
        .map(|block| AcceleratorConfig {
            accelerator_count: block.count,
            accelerator_type: accelerator_type_link(&block.accelerator_type, project, zone),
        })
        .collect()
}

fn accelerator_type_link(accelerator_type: &str, project: &str, zone: &str) -> String {
    if accelerator_type.contains('/') {
        return accelerator_type.to_string();
    }
    format!("projects/{project}/zones/{zone}/acceleratorTypes/{accelerator_type}")
}
