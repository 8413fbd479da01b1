use crate::domain::model::{RampEvent, TargetRef, TargetSelector, TargetSnapshot};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait StateRead: Send + Sync {
    /// Read a target's availability and current volume level.
    async fn read(&self, target: &TargetRef) -> Result<TargetSnapshot>;
}

#[async_trait]
pub trait VolumeApply: Send + Sync {
    /// Set a target's volume to `level` in `[0, 1]`. Fire-and-forget: the
    /// call returns once the command is accepted and never waits for the
    /// device to report the new level.
    async fn apply(&self, target: &TargetRef, level: f64) -> Result<()>;
}

#[async_trait]
pub trait Clock: Send + Sync {
    /// Cooperative delay; suspends only the calling ramp task.
    async fn suspend(&self, seconds: f64);
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: RampEvent);
}

#[async_trait]
pub trait TargetResolver: Send + Sync {
    /// Resolve a selector to a deduplicated set of supported targets.
    async fn resolve(&self, selector: &TargetSelector) -> Result<Vec<TargetRef>>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn token(&self) -> &str;
    fn default_duration(&self) -> f64;
}
