//! Game rules.
//!
//! - `RuleEngine`: legality predicates, move application, phase machine
//! - `scoring`: completion points and the end-of-game decision

pub mod engine;
pub mod scoring;

pub use engine::RuleEngine;
pub use scoring::{completion_points, decide_winner};
