//! Move selection for bots.
//!
//! ## Overview
//!
//! - **RandomPolicy**: samples random legal moves
//! - **HeuristicPolicy**: greedy energy maximization
//! - **RolloutPolicy**: flat Monte-Carlo evaluation, simulating with either
//!   of the above
//!
//! Every policy reads the engine it is handed and never mutates it.
//!
//! ## Usage
//!
//! ```rust
//! use rust_psynth::core::{Difficulty, GameRng, Move, SimKind};
//! use rust_psynth::rules::RuleEngine;
//! use rust_psynth::search::{MovePolicy, RolloutConfig, RolloutPolicy};
//!
//! let mut engine = RuleEngine::new(1).unwrap();
//! let mut rng = GameRng::new(42);
//! let config = RolloutConfig::default()
//!     .with_difficulty(Difficulty::Easy)
//!     .with_sim(SimKind::Random);
//! let bot = RolloutPolicy::new(config);
//!
//! let mv = bot.choose_move(&engine, &mut rng);
//! assert!(matches!(mv, Move::Prepare(_)));
//! engine.apply(&mv).unwrap();
//! ```

pub mod config;
pub mod heuristic;
pub mod policy;
pub mod random;
pub mod rollout;
pub mod stats;

pub use config::RolloutConfig;
pub use heuristic::HeuristicPolicy;
pub use policy::{simulation_policy, MovePolicy};
pub use random::RandomPolicy;
pub use rollout::{CandidateScore, RolloutDecision, RolloutPolicy};
pub use stats::RolloutStats;
