//! Moves and the fixed "beats" relation

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseMoveError;

/// A move in Rock-Paper-Scissors-Lizard-Spock
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    /// Every move in canonical order.
    ///
    /// The order matters: random selection indexes into it and the
    /// predictive opponent picks the first defeater found in it.
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// The two moves this move defeats, with the verb used for each.
    const fn victims(self) -> [(Move, &'static str); 2] {
        match self {
            Move::Rock => [(Move::Scissors, "crushes"), (Move::Lizard, "crushes")],
            Move::Paper => [(Move::Rock, "covers"), (Move::Spock, "disproves")],
            Move::Scissors => [(Move::Paper, "cuts"), (Move::Lizard, "decapitates")],
            Move::Lizard => [(Move::Paper, "eats"), (Move::Spock, "poisons")],
            Move::Spock => [(Move::Scissors, "smashes"), (Move::Rock, "vaporizes")],
        }
    }

    /// Check if this move beats the other
    pub fn beats(self, other: Move) -> bool {
        self.victims().iter().any(|(victim, _)| *victim == other)
    }

    /// Moves this move defeats
    pub fn defeats(self) -> [Move; 2] {
        let [(a, _), (b, _)] = self.victims();
        [a, b]
    }

    /// All moves that beat this one, in canonical order
    pub fn defeaters(self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|candidate| candidate.beats(self))
            .collect()
    }

    /// Verb describing how this move beats `other`, if it does.
    pub fn verb_against(self, other: Move) -> Option<&'static str> {
        self.victims()
            .iter()
            .find(|(victim, _)| *victim == other)
            .map(|(_, verb)| *verb)
    }

    /// Display label ("Rock", "Spock", ...)
    pub fn label(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
            Move::Lizard => "Lizard",
            Move::Spock => "Spock",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .iter()
            .copied()
            .find(|m| m.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseMoveError(s.to_string()))
    }
}

/// Does `a` defeat `b`?
pub fn beats(a: Move, b: Move) -> bool {
    a.beats(b)
}

/// All moves that defeat `m`, in canonical order
pub fn defeaters_of(m: Move) -> Vec<Move> {
    m.defeaters()
}

/// The fixed move catalog, in canonical order
pub fn all_moves() -> &'static [Move] {
    &Move::ALL
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_move() -> impl Strategy<Value = Move> {
        prop::sample::select(Move::ALL.to_vec())
    }

    #[test]
    fn test_beats_table() {
        assert!(beats(Move::Rock, Move::Scissors));
        assert!(beats(Move::Rock, Move::Lizard));
        assert!(beats(Move::Paper, Move::Rock));
        assert!(beats(Move::Paper, Move::Spock));
        assert!(beats(Move::Scissors, Move::Paper));
        assert!(beats(Move::Scissors, Move::Lizard));
        assert!(beats(Move::Lizard, Move::Paper));
        assert!(beats(Move::Lizard, Move::Spock));
        assert!(beats(Move::Spock, Move::Scissors));
        assert!(beats(Move::Spock, Move::Rock));

        assert!(!beats(Move::Rock, Move::Paper));
        assert!(!beats(Move::Lizard, Move::Rock));
        assert!(!beats(Move::Spock, Move::Paper));
    }

    #[test]
    fn test_no_move_beats_itself() {
        for m in all_moves() {
            assert!(!beats(*m, *m), "{} beats itself", m);
        }
    }

    #[test]
    fn test_each_move_wins_and_loses_twice() {
        for m in all_moves() {
            let wins = all_moves().iter().filter(|o| m.beats(**o)).count();
            assert_eq!(wins, 2, "{} should beat exactly two moves", m);
            assert_eq!(defeaters_of(*m).len(), 2, "{} should lose to exactly two moves", m);
        }
    }

    #[test]
    fn test_defeaters_canonical_order() {
        assert_eq!(defeaters_of(Move::Rock), vec![Move::Paper, Move::Spock]);
        assert_eq!(defeaters_of(Move::Paper), vec![Move::Scissors, Move::Lizard]);
        assert_eq!(defeaters_of(Move::Scissors), vec![Move::Rock, Move::Spock]);
        assert_eq!(defeaters_of(Move::Lizard), vec![Move::Rock, Move::Scissors]);
        assert_eq!(defeaters_of(Move::Spock), vec![Move::Paper, Move::Lizard]);
    }

    #[test]
    fn test_relation_is_cyclic() {
        // No move dominates every other one
        for m in all_moves() {
            assert!(!defeaters_of(*m).is_empty());
        }
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Scissors.beats(Move::Paper));
        assert!(Move::Paper.beats(Move::Rock));
    }

    #[test]
    fn test_verbs() {
        assert_eq!(Move::Scissors.verb_against(Move::Paper), Some("cuts"));
        assert_eq!(Move::Spock.verb_against(Move::Rock), Some("vaporizes"));
        assert_eq!(Move::Lizard.verb_against(Move::Spock), Some("poisons"));
        assert_eq!(Move::Rock.verb_against(Move::Paper), None);
        assert_eq!(Move::Rock.verb_against(Move::Rock), None);
    }

    #[test]
    fn test_parse_move() {
        assert_eq!("rock".parse::<Move>(), Ok(Move::Rock));
        assert_eq!("SPOCK".parse::<Move>(), Ok(Move::Spock));
        assert_eq!(" Lizard ".parse::<Move>(), Ok(Move::Lizard));
        assert!("dynamite".parse::<Move>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"scissors\"");
        let m: Move = serde_json::from_str("\"spock\"").unwrap();
        assert_eq!(m, Move::Spock);
    }

    proptest! {
        #[test]
        fn prop_exactly_one_direction_holds(a in any_move(), b in any_move()) {
            if a == b {
                prop_assert!(!a.beats(b));
            } else {
                prop_assert!(a.beats(b) ^ b.beats(a));
            }
        }

        #[test]
        fn prop_defeaters_inverse_of_beats(a in any_move(), b in any_move()) {
            prop_assert_eq!(defeaters_of(b).contains(&a), beats(a, b));
        }
    }
}
