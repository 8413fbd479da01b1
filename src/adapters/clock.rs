use crate::domain::ports::Clock;
use async_trait::async_trait;
use std::time::Duration;

/// Cooperative delay on the tokio timer; suspends only the calling task.
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn suspend(&self, seconds: f64) {
        if seconds > 0.0 {
            tokio::time::sleep(Duration::from_secs_f64(seconds)).await;
        }
    }
}
