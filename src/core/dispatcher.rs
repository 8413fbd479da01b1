use crate::core::ramp::RampExecutor;
use crate::domain::model::{RampEvent, TargetRef};
use crate::domain::ports::{Clock, EventSink, StateRead, VolumeApply};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Fans one ramp task out per target and joins them all. Targets ramp
/// concurrently on independent timers; there is no cross-target ordering.
pub struct Dispatcher<B, K, E> {
    executor: Arc<RampExecutor<B, K, E>>,
    events: Arc<E>,
}

impl<B, K, E> Dispatcher<B, K, E>
where
    B: StateRead + VolumeApply + 'static,
    K: Clock + 'static,
    E: EventSink + 'static,
{
    pub fn new(backend: Arc<B>, clock: Arc<K>, events: Arc<E>) -> Self {
        Self {
            executor: Arc::new(RampExecutor::new(backend, clock, Arc::clone(&events))),
            events,
        }
    }

    /// Completes only once every per-target ramp has finished or been
    /// skipped. Per-target conditions never propagate out of here.
    pub async fn dispatch(&self, targets: Vec<TargetRef>, target_pct: i64, duration: f64) {
        if targets.is_empty() {
            self.events.emit(RampEvent::NoTargetsResolved);
            return;
        }

        let mut tasks = JoinSet::new();
        for target in targets {
            let executor = Arc::clone(&self.executor);
            tasks.spawn(async move {
                executor.ramp(target, target_pct, duration).await;
            });
        }

        while let Some(result) = tasks.join_next().await {
            if let Err(e) = result {
                // A panicked ramp must not take its siblings down.
                tracing::warn!("ramp task failed: {}", e);
            }
        }
    }
}
