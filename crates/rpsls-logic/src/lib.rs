//! Match Logic for Rock-Paper-Scissors-Lizard-Spock
//!
//! Core game logic for a match against a computer opponent.
//! This crate is compiled to:
//! - Native (for tests and embedding)
//! - WASM (for the browser frontend)

mod config;
mod error;
mod game;
mod moves;
mod random;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::MatchConfig;
pub use error::{MatchError, ParseDifficultyError, ParseMoveError};
pub use game::{
    is_finished, play_round, resolve, start, MatchPhase, MatchState, MatchSummary, RoundOutcome,
    RoundPlay, RoundRecord, RoundReport,
};
pub use moves::{all_moves, beats, defeaters_of, Move};
pub use random::{RandomSource, ScriptedRng, SeededRng};
pub use strategy::{
    describe_difficulty, predictive_move, random_move, select_move, Difficulty,
    MEDIUM_RANDOM_PERCENT,
};
