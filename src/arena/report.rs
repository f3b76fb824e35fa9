//! Series results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{ColorMap, PlayerColor};

use super::driver::MatchResult;

/// Accumulated results of a series.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesReport {
    games: Vec<MatchResult>,
    wins: ColorMap<u32>,
}

impl SeriesReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: MatchResult) {
        if let Some(winner) = result.winner() {
            self.wins[winner] += 1;
        }
        self.games.push(result);
    }

    #[must_use]
    pub fn games(&self) -> &[MatchResult] {
        &self.games
    }

    #[must_use]
    pub fn wins(&self, color: PlayerColor) -> u32 {
        self.wins[color]
    }
}

impl SeriesReport {
    fn write_rows(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        pick: impl Fn(&MatchResult) -> &ColorMap<u32>,
    ) -> fmt::Result {
        writeln!(f, "{label}:")?;
        for color in PlayerColor::ALL {
            write!(f, "{:<8}", color.to_string())?;
            for result in &self.games {
                write!(f, "{:>6}", pick(result)[color])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for SeriesReport {
    /// One column per game, rows for points and energy per color.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in PlayerColor::ALL {
            writeln!(f, "{color} wins {} time(s)", self.wins[color])?;
        }
        writeln!(f)?;

        write!(f, "{:<8}", "game")?;
        for game in 1..=self.games.len() {
            write!(f, "{game:>6}")?;
        }
        writeln!(f)?;

        self.write_rows(f, "points", |r| &r.points)?;
        self.write_rows(f, "energy", |r| &r.energy)?;
        Ok(())
    }
}
