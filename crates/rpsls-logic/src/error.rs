//! Error types

use thiserror::Error;

use crate::game::MatchPhase;

/// Errors raised by the match state machine
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A match needs at least one round.
    #[error("invalid configuration: total rounds must be at least 1 (got {total_rounds})")]
    InvalidConfiguration { total_rounds: u32 },

    /// A round was played outside the `InProgress` phase.
    #[error("cannot play a round while the match is {phase}")]
    PreconditionViolation { phase: MatchPhase },

    /// Configuration could not be parsed.
    #[error("malformed match configuration: {0}")]
    Config(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown move: {0:?}")]
pub struct ParseMoveError(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown difficulty: {0:?}")]
pub struct ParseDifficultyError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatchError::InvalidConfiguration { total_rounds: 0 };
        assert_eq!(
            err.to_string(),
            "invalid configuration: total rounds must be at least 1 (got 0)"
        );

        let err = MatchError::PreconditionViolation { phase: MatchPhase::Finished };
        assert_eq!(err.to_string(), "cannot play a round while the match is finished");

        assert_eq!(ParseMoveError("x".into()).to_string(), "unknown move: \"x\"");
    }
}
