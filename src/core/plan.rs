//! Step-plan math for a volume ramp: percent conversion, plan
//! classification, and the sine eased level sequence. Pure functions so the
//! algorithm is testable without any async plumbing.

use std::f64::consts::FRAC_PI_2;

/// Convert a `[0, 1]` volume fraction to an integer percent.
///
/// Rounds half away from zero (`f64::round`); the same rule is applied to
/// the current level and the requested level, so a target read back at
/// exactly the requested percent always classifies as already-at-target.
pub fn percent(level: f64) -> i64 {
    (level * 100.0).round() as i64
}

/// Integer percent back to the `[0, 1]` fraction an apply call takes.
pub fn level(percent: i64) -> f64 {
    percent as f64 / 100.0
}

/// A multi-step ramp: one step per percentage point of change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    pub start: i64,
    pub target: i64,
    pub direction: i64,
    pub steps: u32,
    pub interval: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RampPlan {
    /// Already at the requested level; nothing to emit.
    Skip,
    /// One-point change or non-positive duration: a single exact emission.
    Immediate,
    Steps(StepPlan),
}

/// Classify a ramp from `start` to `target` integer percents over
/// `duration` seconds.
pub fn plan(start: i64, target: i64, duration: f64) -> RampPlan {
    if start == target {
        return RampPlan::Skip;
    }

    let diff = (target - start).abs();
    if diff <= 1 || duration <= 0.0 {
        return RampPlan::Immediate;
    }

    let steps = diff as u32;
    RampPlan::Steps(StepPlan {
        start,
        target,
        direction: if target > start { 1 } else { -1 },
        steps,
        interval: duration / f64::from(steps),
    })
}

impl StepPlan {
    /// Eased level for step `i` in `1..=steps`: sine ease-out, fast start
    /// and slow finish. The final step snaps to the target exactly,
    /// overriding any rounding drift.
    pub fn level_at(&self, i: u32) -> i64 {
        if i >= self.steps {
            return self.target;
        }
        let fraction = f64::from(i) / f64::from(self.steps);
        let eased = (fraction * FRAC_PI_2).sin();
        let delta = ((self.target - self.start).abs() as f64 * eased).round() as i64;
        self.start + self.direction * delta
    }
}
