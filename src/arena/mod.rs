//! Match driver.
//!
//! Owns the referee engine, asks the player on turn for a move, applies it
//! and relays the verdict to both players. A series replays this for several
//! games and collects a [`SeriesReport`].

pub mod config;
pub mod driver;
pub mod report;

pub use config::MatchConfig;
pub use driver::{run_match, run_series, MatchResult};
pub use report::SeriesReport;
