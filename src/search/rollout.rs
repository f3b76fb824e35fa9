//! Flat Monte-Carlo rollout evaluation.
//!
//! ## Algorithm
//!
//! 1. Collect up to `7d+7` candidate first moves: `Empty` first, the rest
//!    proposed by the simulation policy. Proposals equal to an earlier
//!    candidate (order-independent) are skipped but still use up budget.
//! 2. Play each candidate out `10d+10` times on cloned engines. Every later
//!    move comes from the simulation policy, except that each turn passes
//!    with a small probability.
//! 3. Score a candidate by the sum over its rollouts of the searching
//!    player's final points minus the opponent's.
//! 4. Pick the best total; ties go to the later candidate.
//!
//! No tree is kept between decisions.
//!
//! ## Parallelism
//!
//! With `workers > 1` the rollouts of one candidate run on scoped threads.
//! Every rollout owns its engine clone and an RNG forked up front in a fixed
//! order, so the result matches the sequential run exactly. A candidate's
//! total is reduced only after all of its rollouts have joined.

use std::time::Instant;

use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Move, Phase, PlayerColor};
use crate::rules::RuleEngine;

use super::config::RolloutConfig;
use super::policy::{legal_or_empty, simulation_policy, MovePolicy};
use super::random::RandomPolicy;
use super::stats::RolloutStats;

/// Aggregate result of one candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub mv: Move,
    /// Sum of final point differentials over all rollouts.
    pub total: i64,
}

/// Outcome of a rollout search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RolloutDecision {
    pub chosen: Move,
    /// Candidates in evaluation order.
    pub candidates: Vec<CandidateScore>,
    pub stats: RolloutStats,
}

#[derive(Clone, Copy, Debug, Default)]
struct RolloutOutcome {
    differential: i64,
    plies: u64,
    truncated: bool,
}

/// Flat rollout evaluator.
pub struct RolloutPolicy {
    config: RolloutConfig,
    sim: Box<dyn MovePolicy>,
}

impl RolloutPolicy {
    #[must_use]
    pub fn new(config: RolloutConfig) -> Self {
        let sim = simulation_policy(config.sim);
        Self { config, sim }
    }

    /// Run the search for the player to move and report every candidate.
    pub fn evaluate(&self, engine: &RuleEngine, rng: &mut GameRng) -> RolloutDecision {
        let start = Instant::now();
        let mut stats = RolloutStats::new();

        if engine.is_game_over() {
            return RolloutDecision {
                chosen: Move::Empty,
                candidates: Vec::new(),
                stats,
            };
        }

        if engine.current_phase() == Phase::Prepare {
            let chosen = legal_or_empty(&RandomPolicy, engine, rng);
            stats.time_us = start.elapsed().as_micros() as u64;
            return RolloutDecision {
                chosen,
                candidates: Vec::new(),
                stats,
            };
        }

        let me = engine.turn();
        let per_candidate = self.config.rollouts_per_candidate();
        let mut tried: FxHashSet<Move> = FxHashSet::default();
        let mut candidates: Vec<CandidateScore> = Vec::new();
        let mut best: Option<usize> = None;

        for i in 0..self.config.candidates() {
            let mv = if i == 0 {
                Move::Empty
            } else {
                legal_or_empty(self.sim.as_ref(), engine, rng)
            };
            if !tried.insert(mv.clone()) {
                stats.duplicates += 1;
                continue;
            }

            let rngs: Vec<GameRng> = (0..per_candidate).map(|_| rng.fork()).collect();
            let outcomes = self.run_rollouts(engine, &mv, me, rngs);

            let total: i64 = outcomes.iter().map(|o| o.differential).sum();
            stats.candidates += 1;
            stats.rollouts += outcomes.len() as u64;
            stats.plies += outcomes.iter().map(|o| o.plies).sum::<u64>();
            stats.truncated += outcomes.iter().filter(|o| o.truncated).count() as u64;

            debug!("{me} candidate {mv}: total differential {total} over {per_candidate} rollouts");

            if best.map_or(true, |b| total >= candidates[b].total) {
                best = Some(candidates.len());
            }
            candidates.push(CandidateScore { mv, total });
        }

        stats.time_us = start.elapsed().as_micros() as u64;
        let chosen = best.map_or(Move::Empty, |b| candidates[b].mv.clone());
        debug!(
            "{me} picked {chosen} after {} candidates ({} duplicates), {:.0} rollouts/s",
            stats.candidates,
            stats.duplicates,
            stats.rollouts_per_second()
        );

        RolloutDecision {
            chosen,
            candidates,
            stats,
        }
    }

    fn run_rollouts(
        &self,
        engine: &RuleEngine,
        first: &Move,
        me: PlayerColor,
        mut rngs: Vec<GameRng>,
    ) -> Vec<RolloutOutcome> {
        let workers = self.config.workers.max(1);
        if workers == 1 || rngs.len() < 2 {
            return rngs
                .iter_mut()
                .map(|rng| self.rollout(engine, first, me, rng))
                .collect();
        }

        let chunk = rngs.len().div_ceil(workers);
        std::thread::scope(|scope| {
            let handles: Vec<_> = rngs
                .chunks_mut(chunk)
                .map(|batch| {
                    scope.spawn(move || {
                        batch
                            .iter_mut()
                            .map(|rng| self.rollout(engine, first, me, rng))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }

    /// Play one game to the end from `engine` after `first`.
    fn rollout(
        &self,
        engine: &RuleEngine,
        first: &Move,
        me: PlayerColor,
        rng: &mut GameRng,
    ) -> RolloutOutcome {
        let mut sim = engine.clone();
        let mut mv = first.clone();
        let mut outcome = RolloutOutcome::default();

        loop {
            match sim.apply(&mv) {
                Ok(status) if status.is_win() => break,
                Ok(_) => {}
                Err(_) => break,
            }
            outcome.plies += 1;

            if self.config.max_plies > 0 && outcome.plies >= u64::from(self.config.max_plies) {
                outcome.truncated = true;
                break;
            }

            mv = if rng.gen_bool(self.config.empty_probability) {
                Move::Empty
            } else {
                legal_or_empty(self.sim.as_ref(), &sim, rng)
            };
        }

        let mine = i64::from(sim.inventory(me).points());
        let theirs = i64::from(sim.inventory(me.opponent()).points());
        outcome.differential = mine - theirs;
        outcome
    }
}

impl MovePolicy for RolloutPolicy {
    fn choose_move(&self, engine: &RuleEngine, rng: &mut GameRng) -> Move {
        self.evaluate(engine, rng).chosen
    }

    fn name(&self) -> &'static str {
        "advanced"
    }
}
