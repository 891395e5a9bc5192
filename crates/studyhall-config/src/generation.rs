//! Display estimates for the quiz generation progress bar.
//!
//! These numbers are a heuristic for the progress display only; they carry no
//! correctness guarantee about when the generation backend actually finishes.
//!
//! # Configuration
//!
//! - `STUDYHALL_GENERATION_SETUP_SECS`: Fixed setup cost (default: 5)
//! - `STUDYHALL_GENERATION_PER_QUESTION_SECS`: Estimated cost per question
//!   (default: 15)

use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationEstimates {
    /// Fixed cost charged once per run, in seconds.
    pub setup_secs: u64,
    /// Estimated cost per generated question, in seconds.
    pub per_question_secs: u64,
}

impl Default for GenerationEstimates {
    fn default() -> Self {
        Self {
            setup_secs: 5,
            per_question_secs: 15,
        }
    }
}

impl GenerationEstimates {
    /// Creates estimates from environment variables, with defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            setup_secs: std::env::var("STUDYHALL_GENERATION_SETUP_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.setup_secs),
            per_question_secs: std::env::var("STUDYHALL_GENERATION_PER_QUESTION_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.per_question_secs),
        }
    }

    #[must_use]
    pub fn setup(&self) -> Duration {
        Duration::from_secs(self.setup_secs)
    }

    #[must_use]
    pub fn per_question(&self) -> Duration {
        Duration::from_secs(self.per_question_secs)
    }
}
