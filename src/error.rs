//! Error types for game operations.
//!
//! Every error belongs to one of two classes, reported by `kind()`:
//! contract violations are bugs in the calling code (it skipped a documented
//! precondition), while invalid input is an expected, recoverable mistake by
//! a player that a driver can re-prompt for. No failing operation mutates the
//! game.

use thiserror::Error;

/// Class of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller broke a documented precondition.
    ContractViolation,
    /// A player supplied a move the rules do not allow.
    InvalidInput,
}

/// Errors that can occur when creating a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Player count outside 3 to 6.
    #[error("a game needs 3 to 6 players, got {0}")]
    InvalidPlayerCount(usize),
    /// Two players share an identifier.
    #[error("player identifiers must be distinct")]
    DuplicatePlayer,
}

impl SetupError {
    /// Returns the class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::ContractViolation
    }
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Every round of the game has already been started.
    #[error("the game cannot exceed {max} rounds")]
    RoundLimitExceeded {
        /// Number of rounds this game allows.
        max: usize,
    },
    /// A stacked deck is not the 60-card Wizard deck.
    #[error("deck is not a complete Wizard deck")]
    IncompleteDeck,
}

impl RoundError {
    /// Returns the class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::ContractViolation
    }
}

/// Errors that can occur when recording a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// Player not found.
    #[error("player not found")]
    UnknownPlayer,
    /// Predicted more tricks than the round has.
    #[error("prediction must be between 0 and {max}")]
    OutOfRange {
        /// Highest allowed prediction (the round number).
        max: usize,
    },
    /// Player already predicted this round.
    #[error("player already made a prediction this round")]
    AlreadyPredicted,
}

impl PredictionError {
    /// Returns the class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The card is not in the player's hand.
    #[error("card not in player's hand")]
    CardNotInHand,
    /// The player holds the lead suit and must play it.
    #[error("must follow suit if possible")]
    MustFollowSuit,
}

impl PlayError {
    /// Returns the class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// Errors that can occur when scoring a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// No round has been started yet.
    #[error("no round has been started")]
    RoundNotStarted,
    /// Some player still holds cards.
    #[error("round not complete")]
    RoundNotComplete,
    /// Some player never made a prediction this round.
    #[error("a player has not made a prediction")]
    MissingPrediction,
}

impl ScoreError {
    /// Returns the class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::ContractViolation
    }
}
