//! Scheduling mapper

use crate::compute::Scheduling;
use crate::schema::{SchedulingBlock, SchedulingState};

/// Flatten scheduling options. `automatic_restart` is only present in the
/// state when the API reported a value.
pub fn flatten_scheduling(scheduling: &Scheduling) -> SchedulingState {
    SchedulingState {
        on_host_maintenance: scheduling.on_host_maintenance.clone(),
        preemptible: scheduling.preemptible,
        automatic_restart: scheduling.automatic_restart,
    }
}

/// Build scheduling options. A missing block leaves every option at the
/// API default.
pub fn expand_scheduling(block: Option<&SchedulingBlock>) -> Scheduling {
    let Some(block) = block else {
        return Scheduling::default();
    };

    Scheduling {
        on_host_maintenance: block.on_host_maintenance.clone().unwrap_or_default(),
        preemptible: block.preemptible,
        automatic_restart: block.automatic_restart,
    }
}
