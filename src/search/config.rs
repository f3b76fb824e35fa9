//! Rollout search configuration.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, SimKind};

/// Rollout search parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RolloutConfig {
    /// Budget scale: `7d+7` candidates, `10d+10` rollouts each.
    pub difficulty: Difficulty,

    /// Policy used to propose candidates and to play out rollouts.
    pub sim: SimKind,

    /// Per-turn chance that a rollout passes instead of asking the policy.
    /// Keeps rollouts from replaying the same line.
    pub empty_probability: f64,

    /// Hard cap on plies per rollout (0 = unlimited).
    pub max_plies: u32,

    /// Threads sharing the rollouts of one candidate (1 = sequential).
    pub workers: usize,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            sim: SimKind::Simple,
            empty_probability: 0.05,
            max_plies: 2_000,
            workers: 1,
        }
    }
}

impl RolloutConfig {
    /// Candidate first moves tried per decision, `Empty` included.
    #[must_use]
    pub fn candidates(&self) -> u64 {
        7 * u64::from(self.difficulty.level()) + 7
    }

    /// Simulated games per candidate.
    #[must_use]
    pub fn rollouts_per_candidate(&self) -> u64 {
        10 * u64::from(self.difficulty.level()) + 10
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_sim(mut self, sim: SimKind) -> Self {
        self.sim = sim;
        self
    }

    pub fn with_empty_probability(mut self, probability: f64) -> Self {
        self.empty_probability = probability;
        self
    }

    pub fn with_max_plies(mut self, plies: u32) -> Self {
        self.max_plies = plies;
        self
    }

    /// Values below 1 are treated as 1.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
}
