use crate::core::dispatcher::Dispatcher;
use crate::core::plan;
use crate::domain::model::{SetVolumeCall, DEFAULT_DURATION_SECS};
use crate::domain::ports::{Clock, EventSink, StateRead, TargetResolver, VolumeApply};
use crate::utils::error::Result;
use std::sync::Arc;

/// The externally callable set-volume operation: resolve the selector,
/// normalize the requested volume, fan the ramps out.
pub struct VolumeService<R, B, K, E> {
    resolver: Arc<R>,
    dispatcher: Dispatcher<B, K, E>,
}

impl<R, B, K, E> VolumeService<R, B, K, E>
where
    R: TargetResolver,
    B: StateRead + VolumeApply + 'static,
    K: Clock + 'static,
    E: EventSink + 'static,
{
    pub fn new(resolver: Arc<R>, backend: Arc<B>, clock: Arc<K>, events: Arc<E>) -> Self {
        Self {
            resolver,
            dispatcher: Dispatcher::new(backend, clock, events),
        }
    }

    /// Returns once every resolved target has finished or been skipped.
    /// Per-target conditions are absorbed downstream; only resolution
    /// failures surface here.
    pub async fn handle(&self, call: SetVolumeCall) -> Result<()> {
        let targets = self.resolver.resolve(&call.target).await?;
        let target_pct = plan::percent(normalize_volume(call.volume));
        let duration = call.duration.unwrap_or(DEFAULT_DURATION_SECS);

        tracing::debug!(
            targets = targets.len(),
            target_pct,
            duration,
            "dispatching set-volume call"
        );
        self.dispatcher.dispatch(targets, target_pct, duration).await;
        Ok(())
    }
}

/// Accepts a fraction in `[0, 1]` or a percentage in `(1, 100]`.
fn normalize_volume(volume: f64) -> f64 {
    if volume > 1.0 {
        volume / 100.0
    } else {
        volume
    }
}
