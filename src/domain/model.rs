use serde::{Deserialize, Serialize};
use std::fmt;

/// Duration applied when a set-volume call omits one.
pub const DEFAULT_DURATION_SECS: f64 = 5.0;

/// Entity id of an addressable volume target, e.g. `media_player.kitchen`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetRef(pub String);

impl TargetRef {
    /// The entity domain, i.e. the part before the first dot.
    pub fn domain(&self) -> Option<&str> {
        self.0.split_once('.').map(|(domain, _)| domain)
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Target block of a set-volume call. Mirrors the service-call target
/// schema: explicit entity ids plus device/area/label group selectors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetSelector {
    #[serde(default)]
    pub entity_ids: Vec<String>,
    #[serde(default)]
    pub device_ids: Vec<String>,
    #[serde(default)]
    pub area_ids: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// One-shot read of a target's state, taken at the start of its ramp.
/// The ramp is open-loop; the snapshot is never refreshed mid-ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSnapshot {
    pub id: TargetRef,
    pub available: bool,
    pub volume_level: Option<f64>,
}

/// Payload of the externally callable set-volume operation.
///
/// `volume` accepts either a fraction in `[0, 1]` or a percentage in
/// `(1, 100]`; the service entry point normalizes it.
#[derive(Debug, Clone, Deserialize)]
pub struct SetVolumeCall {
    pub target: TargetSelector,
    pub volume: f64,
    pub duration: Option<f64>,
}

/// Warning-level observability events. Expected skips (unavailable target,
/// already at level) emit nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum RampEvent {
    NoTargetsResolved,
    NoVolumeLevel { target: TargetRef },
    ReadFailed { target: TargetRef, reason: String },
    ApplyFailed { target: TargetRef, reason: String },
}
