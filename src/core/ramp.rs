use crate::core::plan::{self, RampPlan};
use crate::domain::model::{RampEvent, TargetRef};
use crate::domain::ports::{Clock, EventSink, StateRead, VolumeApply};
use std::sync::Arc;

/// Per-target ramp state machine: reads the target once, derives a step
/// plan, and emits eased volume-set commands paced by the clock.
pub struct RampExecutor<B, K, E> {
    backend: Arc<B>,
    clock: Arc<K>,
    events: Arc<E>,
}

impl<B, K, E> RampExecutor<B, K, E>
where
    B: StateRead + VolumeApply,
    K: Clock,
    E: EventSink,
{
    pub fn new(backend: Arc<B>, clock: Arc<K>, events: Arc<E>) -> Self {
        Self {
            backend,
            clock,
            events,
        }
    }

    /// Ramp one target to `target_pct` over `duration` seconds.
    ///
    /// Never returns an error: expected skips (unavailable target, already
    /// at level) are silent, anomalies surface as events on the sink, and
    /// everything is absorbed here so sibling ramps are unaffected.
    pub async fn ramp(&self, target: TargetRef, target_pct: i64, duration: f64) {
        let snapshot = match self.backend.read(&target).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.events.emit(RampEvent::ReadFailed {
                    target,
                    reason: e.to_string(),
                });
                return;
            }
        };

        if !snapshot.available {
            // Unavailable, unknown or off: an expected outcome, not worth a warning.
            return;
        }

        let Some(current) = snapshot.volume_level else {
            self.events.emit(RampEvent::NoVolumeLevel { target });
            return;
        };

        let start_pct = plan::percent(current);
        match plan::plan(start_pct, target_pct, duration) {
            RampPlan::Skip => {}
            RampPlan::Immediate => {
                self.apply(&target, plan::level(target_pct)).await;
            }
            RampPlan::Steps(steps) => {
                tracing::debug!(
                    entity = %target,
                    start = start_pct,
                    end = target_pct,
                    steps = steps.steps,
                    interval = steps.interval,
                    "starting volume ramp"
                );

                for i in 1..=steps.steps {
                    let level = plan::level(steps.level_at(i));
                    if !self.apply(&target, level).await {
                        // Abandon the remaining steps for this target only.
                        return;
                    }
                    if i < steps.steps {
                        self.clock.suspend(steps.interval).await;
                    }
                }
            }
        }
    }

    async fn apply(&self, target: &TargetRef, level: f64) -> bool {
        match self.backend.apply(target, level).await {
            Ok(()) => true,
            Err(e) => {
                self.events.emit(RampEvent::ApplyFailed {
                    target: target.clone(),
                    reason: e.to_string(),
                });
                false
            }
        }
    }
}
