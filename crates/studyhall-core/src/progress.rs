//! Progress estimation for long-running remote operations.
//!
//! Quiz generation is a single opaque `POST` whose true completion time is
//! unknown. [`ProgressEstimator`] produces a display-only approximation:
//! elapsed time against a planned duration (fixed setup cost plus a per-unit
//! cost), walked through an ordered list of textual phases.
//!
//! The estimator is pure and time-injected; an async driver feeds it elapsed
//! durations and publishes the resulting [`ProgressState`] snapshots.
//!
//! # Invariants
//!
//! - simulated progress never exceeds [`SIMULATED_PROGRESS_CEILING`] (95%)
//! - only [`ProgressEstimator::complete`] reaches 100, only
//!   [`ProgressEstimator::fail`] resets to 0; both consume the estimator, so
//!   a run terminates exactly once
//! - the phase label advances monotonically and never runs past the last phase

use std::time::Duration;

/// Simulated progress is capped here; only the real server response may
/// push the display to 100.
pub const SIMULATED_PROGRESS_CEILING: u8 = 95;

/// A point-in-time view of a long-running operation, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    pub is_loading: bool,
    /// Human-readable description of the current phase.
    pub current_step: String,
    /// Percentage in [0, 100]; at most 95 while simulated.
    pub progress: u8,
    /// The unit (question) the run is estimated to be working on, 1-indexed.
    pub current_unit: u32,
    pub total_units: u32,
    pub estimated_remaining: Duration,
}

impl ProgressState {
    /// The resting state before a run starts or after it was aborted.
    #[must_use]
    pub fn idle(total_units: u32) -> Self {
        Self {
            is_loading: false,
            current_step: String::new(),
            progress: 0,
            current_unit: 0,
            total_units,
            estimated_remaining: Duration::ZERO,
        }
    }
}

struct Phase {
    label: &'static str,
    /// Fraction of the planned duration this phase occupies.
    share: f64,
}

const PHASES: &[Phase] = &[
    Phase {
        label: "Preparing source material",
        share: 0.10,
    },
    Phase {
        label: "Analyzing key concepts",
        share: 0.20,
    },
    Phase {
        label: "Drafting questions",
        share: 0.45,
    },
    Phase {
        label: "Writing explanations",
        share: 0.20,
    },
    Phase {
        label: "Finalizing question set",
        share: 0.05,
    },
];

const COMPLETED_STEP: &str = "Question set ready";
const FAILED_STEP: &str = "Generation failed";

/// Plans and reports estimated progress for one generation run.
#[derive(Debug, Clone)]
pub struct ProgressEstimator {
    total_units: u32,
    total_estimated: Duration,
}

impl ProgressEstimator {
    /// Plans a run of `total_units` units.
    ///
    /// The planned duration is `setup + total_units * per_unit`, floored at
    /// one second so a zero-unit or zero-cost plan still ticks sanely.
    #[must_use]
    pub fn new(total_units: u32, setup: Duration, per_unit: Duration) -> Self {
        let total_estimated = (setup + per_unit * total_units).max(Duration::from_secs(1));
        Self {
            total_units,
            total_estimated,
        }
    }

    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.total_units
    }

    #[must_use]
    pub fn total_estimated(&self) -> Duration {
        self.total_estimated
    }

    /// The simulated state after `elapsed` time, capped at the ceiling.
    #[must_use]
    pub fn snapshot(&self, elapsed: Duration) -> ProgressState {
        let ratio = (elapsed.as_secs_f64() / self.total_estimated.as_secs_f64()).clamp(0.0, 1.0);

        let raw_percent = (ratio * 100.0).floor() as u8;
        let progress = raw_percent.min(SIMULATED_PROGRESS_CEILING);

        let current_unit = if self.total_units == 0 {
            0
        } else {
            ((ratio * f64::from(self.total_units)).ceil() as u32).clamp(1, self.total_units)
        };

        ProgressState {
            is_loading: true,
            current_step: phase_label(ratio).to_string(),
            progress,
            current_unit,
            total_units: self.total_units,
            estimated_remaining: self.total_estimated.saturating_sub(elapsed),
        }
    }

    /// Terminal success state; only the real server response may call this.
    #[must_use]
    pub fn complete(self) -> ProgressState {
        ProgressState {
            is_loading: false,
            current_step: COMPLETED_STEP.to_string(),
            progress: 100,
            current_unit: self.total_units,
            total_units: self.total_units,
            estimated_remaining: Duration::ZERO,
        }
    }

    /// Terminal failure state: progress resets to 0, nothing partial remains.
    #[must_use]
    pub fn fail(self) -> ProgressState {
        ProgressState {
            is_loading: false,
            current_step: FAILED_STEP.to_string(),
            progress: 0,
            current_unit: 0,
            total_units: self.total_units,
            estimated_remaining: Duration::ZERO,
        }
    }
}

fn phase_label(ratio: f64) -> &'static str {
    let mut cumulative = 0.0;
    for phase in PHASES {
        cumulative += phase.share;
        if ratio < cumulative {
            return phase.label;
        }
    }
    PHASES[PHASES.len() - 1].label
}
