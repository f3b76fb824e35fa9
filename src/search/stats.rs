//! Rollout search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one rollout decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloutStats {
    /// Distinct candidates that were played out.
    pub candidates: u32,

    /// Proposals skipped because an equal move was already evaluated.
    pub duplicates: u32,

    /// Simulated games.
    pub rollouts: u64,

    /// Moves applied across all simulated games.
    pub plies: u64,

    /// Rollouts stopped by the ply cap before a winner was decided.
    pub truncated: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl RolloutStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate rollouts per second.
    #[must_use]
    pub fn rollouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.rollouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average game length in plies.
    #[must_use]
    pub fn avg_plies_per_rollout(&self) -> f64 {
        if self.rollouts == 0 {
            0.0
        } else {
            self.plies as f64 / self.rollouts as f64
        }
    }
}
