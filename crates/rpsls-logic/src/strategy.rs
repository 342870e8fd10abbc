//! Computer opponent strategy

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseDifficultyError;
use crate::moves::Move;
use crate::random::RandomSource;

/// Chance (in percent) that Medium plays a random move instead of predicting.
pub const MEDIUM_RANDOM_PERCENT: u8 = 50;

/// Opponent difficulty, fixed for the whole match
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random every round.
    #[default]
    Easy,
    /// Coin flip each round between random and predictive.
    Medium,
    /// Always counters the player's previous move.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Whether the opponent ever looks at the player's last move
    pub fn uses_prediction(self) -> bool {
        !matches!(self, Difficulty::Easy)
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// Pick one of the five moves uniformly. Consumes one draw.
pub fn random_move<R: RandomSource>(rng: &mut R) -> Move {
    Move::ALL[rng.next_range(Move::ALL.len() as u32) as usize]
}

/// Counter the player's previous move
///
/// With no history this falls back to [`random_move`]. Otherwise it returns
/// the first defeater of `last_player_move` in canonical order and draws
/// nothing from `rng`.
pub fn predictive_move<R: RandomSource>(last_player_move: Option<Move>, rng: &mut R) -> Move {
    match last_player_move {
        None => random_move(rng),
        Some(last) => counter_of(last),
    }
}

/// First defeater of `m` in canonical order
///
/// After an opening Paper the counter is Scissors, never Rock or Spock:
/// those are the moves Paper beats, not the ones that beat it.
fn counter_of(m: Move) -> Move {
    match m {
        Move::Rock => Move::Paper,
        Move::Paper => Move::Scissors,
        Move::Scissors => Move::Rock,
        Move::Lizard => Move::Rock,
        Move::Spock => Move::Paper,
    }
}

/// Choose the computer's move for the upcoming round
///
/// # Arguments
/// * `difficulty` - Opponent tier for this match
/// * `last_player_move` - Player's move from the *previous* round, if any
/// * `rng` - Random source; Medium draws its coin flip from it first
pub fn select_move<R: RandomSource>(
    difficulty: Difficulty,
    last_player_move: Option<Move>,
    rng: &mut R,
) -> Move {
    match difficulty {
        Difficulty::Easy => random_move(rng),
        Difficulty::Medium => {
            if rng.next_percent() < MEDIUM_RANDOM_PERCENT {
                random_move(rng)
            } else {
                predictive_move(last_player_move, rng)
            }
        }
        Difficulty::Hard => predictive_move(last_player_move, rng),
    }
}

/// Human-readable description of a difficulty
pub fn describe_difficulty(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "The computer picks a move at random every round.",
        Difficulty::Medium => "Half the time the computer counters your last move.",
        Difficulty::Hard => "The computer always counters your last move.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRng, SeededRng};

    fn make_rng() -> SeededRng {
        SeededRng::new(&[42u8; 32], 0)
    }

    #[test]
    fn test_counter_is_first_defeater() {
        for m in Move::ALL {
            assert_eq!(counter_of(m), m.defeaters()[0], "counter of {}", m);
            assert!(counter_of(m).beats(m));
        }
    }

    #[test]
    fn test_counter_of_paper_is_not_its_victim() {
        assert_eq!(counter_of(Move::Paper), Move::Scissors);
        for victim in Move::Paper.defeats() {
            assert_ne!(counter_of(Move::Paper), victim);
        }
    }

    #[test]
    fn test_random_move_follows_script() {
        let mut rng = ScriptedRng::new(vec![0, 1, 2, 3, 4, 5]);
        let moves: Vec<_> = (0..6).map(|_| random_move(&mut rng)).collect();
        assert_eq!(
            moves,
            vec![Move::Rock, Move::Paper, Move::Scissors, Move::Lizard, Move::Spock, Move::Rock]
        );
    }

    #[test]
    fn test_predictive_without_history_is_random() {
        let mut rng = ScriptedRng::new(vec![4]);
        assert_eq!(predictive_move(None, &mut rng), Move::Spock);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_predictive_with_history_draws_nothing() {
        let mut rng = ScriptedRng::new(vec![0]);
        assert_eq!(predictive_move(Some(Move::Rock), &mut rng), Move::Paper);
        assert_eq!(predictive_move(Some(Move::Spock), &mut rng), Move::Paper);
        assert_eq!(predictive_move(Some(Move::Lizard), &mut rng), Move::Rock);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_hard_always_counters() {
        let mut rng = make_rng();
        for _ in 0..50 {
            let m = select_move(Difficulty::Hard, Some(Move::Rock), &mut rng);
            assert!(Move::Rock.defeaters().contains(&m));
        }
    }

    #[test]
    fn test_medium_coin_flip_branches() {
        // Low percent: random branch, then the move draw picks Lizard
        let mut rng = ScriptedRng::new(vec![10, 3]);
        assert_eq!(select_move(Difficulty::Medium, Some(Move::Rock), &mut rng), Move::Lizard);
        assert_eq!(rng.draws(), 2);

        // High percent: predictive branch
        let mut rng = ScriptedRng::new(vec![75]);
        assert_eq!(select_move(Difficulty::Medium, Some(Move::Rock), &mut rng), Move::Paper);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_easy_distribution_is_uniform() {
        let mut rng = make_rng();
        let trials = 50_000;
        let mut counts = [0u32; 5];
        for _ in 0..trials {
            let m = select_move(Difficulty::Easy, Some(Move::Rock), &mut rng);
            let idx = Move::ALL.iter().position(|x| *x == m).unwrap();
            counts[idx] += 1;
        }
        for (m, count) in Move::ALL.iter().zip(counts) {
            let freq = count as f64 / trials as f64;
            assert!((freq - 0.2).abs() < 0.02, "{} frequency {} not ~0.2", m, freq);
        }
    }

    #[test]
    fn test_medium_counter_rate() {
        let mut rng = make_rng();
        let trials = 20_000;
        let counters = (0..trials)
            .filter(|_| select_move(Difficulty::Medium, Some(Move::Scissors), &mut rng) == Move::Rock)
            .count();
        // 50% predictive plus 50% * 1/5 random hits
        let freq = counters as f64 / trials as f64;
        assert!((freq - 0.6).abs() < 0.03, "Medium counter rate {} not ~0.6", freq);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("nightmare".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_prediction_flag() {
        assert!(!Difficulty::Easy.uses_prediction());
        assert!(Difficulty::Medium.uses_prediction());
        assert!(Difficulty::Hard.uses_prediction());
    }
}
