//! Match state machine

use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::moves::Move;
use crate::random::RandomSource;
use crate::strategy::{select_move, Difficulty};

/// Lifecycle phase of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    NotStarted,
    InProgress,
    Finished,
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchPhase::NotStarted => "not started",
            MatchPhase::InProgress => "in progress",
            MatchPhase::Finished => "finished",
        })
    }
}

/// Outcome of a round, or of a whole match, from the player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerWin,
    ComputerWin,
    Draw,
}

impl RoundOutcome {
    /// Compare two scores
    pub fn from_scores(player: u32, computer: u32) -> Self {
        match player.cmp(&computer) {
            core::cmp::Ordering::Greater => RoundOutcome::PlayerWin,
            core::cmp::Ordering::Less => RoundOutcome::ComputerWin,
            core::cmp::Ordering::Equal => RoundOutcome::Draw,
        }
    }
}

/// Resolve a round
pub fn resolve(player_move: Move, computer_move: Move) -> RoundOutcome {
    if player_move == computer_move {
        RoundOutcome::Draw
    } else if player_move.beats(computer_move) {
        RoundOutcome::PlayerWin
    } else {
        RoundOutcome::ComputerWin
    }
}

/// A resolved round as kept in the match history
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: u32,
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: RoundOutcome,
    /// Scores after this round
    pub player_score: u32,
    pub computer_score: u32,
}

/// Final result of a finished match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub result: RoundOutcome,
    pub player_score: u32,
    pub computer_score: u32,
    /// Only a player victory earns the celebration effect
    pub celebrate: bool,
}

impl MatchSummary {
    pub fn message(&self) -> String {
        let headline = match self.result {
            RoundOutcome::PlayerWin => "You won the match!",
            RoundOutcome::ComputerWin => "The computer won the match.",
            RoundOutcome::Draw => "The match is a draw.",
        };
        format!("{} Final score {} - {}", headline, self.player_score, self.computer_score)
    }
}

/// Everything the presentation layer needs after one round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: RoundOutcome,
    pub player_score: u32,
    pub computer_score: u32,
    pub rounds_remaining: u32,
    pub finished: bool,
    /// Present once the match has finished
    pub summary: Option<MatchSummary>,
}

impl RoundReport {
    /// Display line, e.g. "Spock vaporizes Rock. You win!"
    pub fn message(&self) -> String {
        match self.outcome {
            RoundOutcome::Draw => format!("Both chose {}. It's a draw.", self.player_move),
            RoundOutcome::PlayerWin => format!(
                "{} {} {}. You win!",
                self.player_move,
                self.player_move.verb_against(self.computer_move).unwrap_or("beats"),
                self.computer_move
            ),
            RoundOutcome::ComputerWin => format!(
                "{} {} {}. You lose!",
                self.computer_move,
                self.computer_move.verb_against(self.player_move).unwrap_or("beats"),
                self.player_move
            ),
        }
    }
}

/// A round report paired with the state it produced
#[derive(Clone, Debug)]
pub struct RoundPlay {
    pub report: RoundReport,
    pub state_after: MatchState,
}

/// The single mutable record for a match
///
/// `MatchState::default()` is a match that has not started yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player_score: u32,
    pub computer_score: u32,
    pub rounds_remaining: u32,
    pub total_rounds: u32,
    pub difficulty: Difficulty,
    /// Player's move from the most recent round, used for prediction
    pub last_player_move: Option<Move>,
    pub history: Vec<RoundRecord>,
}

impl MatchState {
    /// Upper bound on the history reserved up front; longer matches grow it.
    const HISTORY_RESERVE: u32 = 16;

    /// Begin a fresh match
    ///
    /// # Errors
    /// `InvalidConfiguration` if `total_rounds` is zero.
    pub fn start(difficulty: Difficulty, total_rounds: u32) -> Result<Self, MatchError> {
        if total_rounds < 1 {
            return Err(MatchError::InvalidConfiguration { total_rounds });
        }
        info!(%difficulty, total_rounds, "match started");
        Ok(Self {
            player_score: 0,
            computer_score: 0,
            rounds_remaining: total_rounds,
            total_rounds,
            difficulty,
            last_player_move: None,
            history: Vec::with_capacity(total_rounds.min(Self::HISTORY_RESERVE) as usize),
        })
    }

    pub fn from_config(config: &MatchConfig) -> Result<Self, MatchError> {
        Self::start(config.difficulty, config.total_rounds)
    }

    /// Start over with the same difficulty and length
    pub fn restart(&mut self) -> Result<(), MatchError> {
        *self = Self::start(self.difficulty, self.total_rounds)?;
        Ok(())
    }

    /// Counters that no `start` could have produced (more rounds remaining
    /// than the match has) count as not started.
    pub fn phase(&self) -> MatchPhase {
        if self.total_rounds == 0 || self.rounds_remaining > self.total_rounds {
            MatchPhase::NotStarted
        } else if self.rounds_remaining == 0 {
            MatchPhase::Finished
        } else {
            MatchPhase::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.rounds_remaining == 0
    }

    /// 1-based number of the next round to be played
    pub fn round_number(&self) -> u32 {
        self.total_rounds
            .saturating_sub(self.rounds_remaining)
            .saturating_add(1)
    }

    /// Overall result, once the match has finished
    pub fn summary(&self) -> Option<MatchSummary> {
        if self.phase() != MatchPhase::Finished {
            return None;
        }
        let result = RoundOutcome::from_scores(self.player_score, self.computer_score);
        Some(MatchSummary {
            result,
            player_score: self.player_score,
            computer_score: self.computer_score,
            celebrate: result == RoundOutcome::PlayerWin,
        })
    }

    /// Play one round against the computer
    ///
    /// The computer's move is chosen from the *previous* round's player
    /// move before `player_move` is looked at. Nothing is mutated when an
    /// error is returned.
    ///
    /// # Errors
    /// `PreconditionViolation` unless the match is in progress.
    pub fn play_round<R: RandomSource>(
        &mut self,
        player_move: Move,
        rng: &mut R,
    ) -> Result<RoundReport, MatchError> {
        let phase = self.phase();
        if phase != MatchPhase::InProgress {
            warn!(%phase, "round played outside an active match");
            return Err(MatchError::PreconditionViolation { phase });
        }

        let round = self.round_number();
        let computer_move = select_move(self.difficulty, self.last_player_move, rng);
        let outcome = resolve(player_move, computer_move);

        match outcome {
            RoundOutcome::PlayerWin => self.player_score = self.player_score.saturating_add(1),
            RoundOutcome::ComputerWin => self.computer_score = self.computer_score.saturating_add(1),
            RoundOutcome::Draw => {}
        }
        self.last_player_move = Some(player_move);
        self.rounds_remaining -= 1;

        self.history.push(RoundRecord {
            round,
            player_move,
            computer_move,
            outcome,
            player_score: self.player_score,
            computer_score: self.computer_score,
        });
        debug!(
            round,
            %player_move,
            %computer_move,
            ?outcome,
            rounds_remaining = self.rounds_remaining,
            "round resolved"
        );

        let summary = self.summary();
        if let Some(summary) = &summary {
            info!(
                result = ?summary.result,
                player_score = summary.player_score,
                computer_score = summary.computer_score,
                "match finished"
            );
        }

        Ok(RoundReport {
            round,
            player_move,
            computer_move,
            outcome,
            player_score: self.player_score,
            computer_score: self.computer_score,
            rounds_remaining: self.rounds_remaining,
            finished: summary.is_some(),
            summary,
        })
    }
}

/// Begin a fresh match
pub fn start(difficulty: Difficulty, total_rounds: u32) -> Result<MatchState, MatchError> {
    MatchState::start(difficulty, total_rounds)
}

/// Play one round without touching `state`, returning the state it leads to
pub fn play_round<R: RandomSource>(
    state: &MatchState,
    player_move: Move,
    rng: &mut R,
) -> Result<RoundPlay, MatchError> {
    let mut state_after = state.clone();
    let report = state_after.play_round(player_move, rng)?;
    Ok(RoundPlay { report, state_after })
}

pub fn is_finished(state: &MatchState) -> bool {
    state.is_finished()
}
