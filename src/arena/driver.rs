//! Runs games between two players.

use std::thread;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{ColorMap, GameRng, PlayerColor, PlayerKind, Status};
use crate::players::{build_player, HumanInput, Player};
use crate::rules::RuleEngine;

use super::config::MatchConfig;
use super::report::SeriesReport;

/// Final position summary of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub status: Status,
    pub points: ColorMap<u32>,
    pub energy: ColorMap<u32>,
    /// Moves submitted, rejected ones included.
    pub plies: u64,
    /// Completed rounds.
    pub rounds: u32,
}

impl MatchResult {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        self.status.winner()
    }
}

/// Play one game from the initial position.
///
/// The referee engine is the only authoritative copy. The loop ends once it
/// reports game over; any player error aborts the game.
pub fn run_match(config: &MatchConfig, rng: &mut GameRng, input: Option<&HumanInput>) -> Result<MatchResult> {
    let radius = config.game.radius();
    let mut players: [Box<dyn Player>; 2] = [
        build_player(
            PlayerColor::Red,
            &config.players[PlayerColor::Red],
            radius,
            config.workers,
            rng.fork(),
            input,
        )
        .context("failed to create the red player")?,
        build_player(
            PlayerColor::Blue,
            &config.players[PlayerColor::Blue],
            radius,
            config.workers,
            rng.fork(),
            input,
        )
        .context("failed to create the blue player")?,
    ];

    let mut engine = RuleEngine::from_config(config.game);
    let mut status = Status::Ok;
    let mut plies = 0u64;

    while !engine.is_game_over() {
        let mover = engine.turn();
        let (current, other) = match mover {
            PlayerColor::Red => {
                let [red, blue] = &mut players;
                (red, blue)
            }
            PlayerColor::Blue => {
                let [red, blue] = &mut players;
                (blue, red)
            }
        };

        if status == Status::Ok && current.kind() != PlayerKind::Human && !config.delay.is_zero() {
            thread::sleep(config.delay);
        }

        let mv = current
            .request()
            .with_context(|| format!("{mover} failed to produce a move"))?;
        status = engine
            .apply(&mv)
            .with_context(|| format!("referee could not apply {mover} move {mv}"))?;
        plies += 1;
        debug!("{mover} {} {mv}: {status:?}", engine.phase_of(mover));

        current
            .confirm(status)
            .with_context(|| format!("{mover} lost track of the game"))?;
        other
            .update(&mv, status)
            .with_context(|| format!("{} lost track of the game", mover.opponent()))?;
    }

    let result = MatchResult {
        status: engine.status(),
        points: ColorMap::new(|c| engine.inventory(c).points()),
        energy: ColorMap::new(|c| engine.inventory(c).energy()),
        plies,
        rounds: engine.round(),
    };
    info!(
        "game over: {:?}, points {}:{}, energy {}:{}",
        result.status,
        result.points[PlayerColor::Red],
        result.points[PlayerColor::Blue],
        result.energy[PlayerColor::Red],
        result.energy[PlayerColor::Blue],
    );
    Ok(result)
}

/// Play `config.games` games with streams forked from `config.seed`.
pub fn run_series(config: &MatchConfig, input: Option<&HumanInput>) -> Result<SeriesReport> {
    let mut rng = GameRng::new(config.seed);
    let mut report = SeriesReport::new();

    for game in 1..=config.games {
        info!("starting game {game}/{}", config.games);
        let mut game_rng = rng.fork();
        let result = run_match(config, &mut game_rng, input).with_context(|| format!("game {game} aborted"))?;
        report.record(result);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, GameConfig, SimKind};
    use crate::players::PlayerConfig;

    fn bot_match(red: PlayerKind, blue: PlayerKind) -> MatchConfig {
        MatchConfig::default()
            .with_game(GameConfig::new(1).unwrap())
            .with_player(PlayerColor::Red, PlayerConfig::new(red))
            .with_player(
                PlayerColor::Blue,
                PlayerConfig::new(blue)
                    .with_sim(SimKind::Random)
                    .with_difficulty(Difficulty::Easy),
            )
    }

    #[test]
    fn test_random_vs_simple_finishes() {
        let config = bot_match(PlayerKind::Random, PlayerKind::Simple);
        let result = run_match(&config, &mut GameRng::new(1), None).unwrap();
        assert!(result.winner().is_some());
        assert_eq!(result.rounds, 36);
    }

    #[test]
    fn test_match_is_reproducible() {
        let config = bot_match(PlayerKind::Random, PlayerKind::Random);
        let a = run_match(&config, &mut GameRng::new(5), None).unwrap();
        let b = run_match(&config, &mut GameRng::new(5), None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_human_without_input_aborts() {
        let config = MatchConfig::default();
        assert!(run_match(&config, &mut GameRng::new(0), None).is_err());
    }

    #[test]
    fn test_series_counts_games() {
        let config = bot_match(PlayerKind::Simple, PlayerKind::Random).with_games(3);
        let report = run_series(&config, None).unwrap();
        assert_eq!(report.games().len(), 3);
        assert_eq!(report.wins(PlayerColor::Red) + report.wins(PlayerColor::Blue), 3);
    }
}
