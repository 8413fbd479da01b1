use crate::domain::model::RampEvent;
use crate::domain::ports::EventSink;

/// Maps observability events onto warning-level tracing records.
pub struct TracingEvents;

impl EventSink for TracingEvents {
    fn emit(&self, event: RampEvent) {
        match event {
            RampEvent::NoTargetsResolved => {
                tracing::warn!("No available media player entities found for the target");
            }
            RampEvent::NoVolumeLevel { target } => {
                tracing::warn!(entity = %target, "Entity has no volume_level attribute, skipping");
            }
            RampEvent::ReadFailed { target, reason } => {
                tracing::warn!(entity = %target, %reason, "Failed to read entity state, skipping");
            }
            RampEvent::ApplyFailed { target, reason } => {
                tracing::warn!(entity = %target, %reason, "volume_set call failed, abandoning ramp");
            }
        }
    }
}
