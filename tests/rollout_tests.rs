//! Rollout search integration tests.

use rust_psynth::core::{Difficulty, GameRng, Move, Phase, PlayerColor, SimKind, Status};
use rust_psynth::rules::RuleEngine;
use rust_psynth::search::{
    HeuristicPolicy, MovePolicy, RandomPolicy, RolloutConfig, RolloutPolicy,
};

fn easy(sim: SimKind) -> RolloutPolicy {
    RolloutPolicy::new(
        RolloutConfig::default()
            .with_difficulty(Difficulty::Easy)
            .with_sim(sim),
    )
}

// =============================================================================
// Budget
// =============================================================================

#[test]
fn test_easy_budget_and_legality_through_a_game() {
    let bot = easy(SimKind::Random);
    let mut engine = RuleEngine::new(1).unwrap();
    let mut rng = GameRng::new(42);
    let mut decisions = 0;

    while !engine.is_game_over() && decisions < 24 {
        let mv = if engine.turn() == PlayerColor::Red {
            let decision = bot.evaluate(&engine, &mut rng);
            if engine.current_phase() != Phase::Prepare {
                let stats = &decision.stats;
                assert_eq!(stats.candidates + stats.duplicates, 7);
                assert_eq!(stats.rollouts, 10 * u64::from(stats.candidates));
                assert_eq!(decision.candidates[0].mv, Move::Empty);
            }
            decisions += 1;
            decision.chosen
        } else {
            RandomPolicy.choose_move(&engine, &mut rng)
        };

        assert!(engine.is_legal(&mv), "illegal {mv:?} in {}", engine.current_phase());
        assert_ne!(engine.apply(&mv).unwrap(), Status::Illegal);
    }
    assert_eq!(decisions, 24);
}

#[test]
fn test_medium_budget() {
    let config = RolloutConfig::default();
    assert_eq!(config.candidates(), 14);
    assert_eq!(config.rollouts_per_candidate(), 20);

    let impossible = config.with_difficulty(Difficulty::Impossible);
    assert_eq!(impossible.candidates(), 7 * 9001 + 7);
    assert_eq!(impossible.rollouts_per_candidate(), 10 * 9001 + 10);
}

#[test]
fn test_game_over_yields_empty() {
    let mut engine = RuleEngine::new(1).unwrap();
    engine.apply(&Move::Surrender).unwrap();
    let decision = easy(SimKind::Random).evaluate(&engine, &mut GameRng::new(0));
    assert_eq!(decision.chosen, Move::Empty);
    assert!(decision.candidates.is_empty());
}

// =============================================================================
// Simulation Policies
// =============================================================================

#[test]
fn test_heuristic_simulation_is_legal() {
    let mut engine = RuleEngine::new(2).unwrap();
    let mut rng = GameRng::new(3);
    while engine.current_phase() == Phase::Prepare {
        let mv = HeuristicPolicy.choose_move(&engine, &mut rng);
        engine.apply(&mv).unwrap();
    }

    let decision = easy(SimKind::Simple).evaluate(&engine, &mut rng);
    assert!(engine.is_legal(&decision.chosen));
    assert_eq!(decision.stats.truncated, 0);
    assert!(decision.stats.avg_plies_per_rollout() > 0.0);
}
