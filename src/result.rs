//! Result types returned by play and scoring.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Result of a completed trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickResult {
    /// The player who won the trick and leads the next one.
    pub winner: String,
    /// The card that won the trick.
    pub winning_card: Card,
    /// The cards of the trick, in play order.
    pub cards: Vec<Card>,
}

/// What happened after a card was played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The trick continues with the named player.
    NextPlayer(String),
    /// The card completed the trick.
    TrickComplete(TrickResult),
}

/// Scoring for a single player at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    /// The player.
    pub player: String,
    /// Tricks the player predicted.
    pub predicted: usize,
    /// Tricks the player actually won.
    pub won: usize,
    /// Points gained (positive) or lost (negative) this round.
    pub delta: isize,
    /// Cumulative score after this round.
    pub total: isize,
}

impl PlayerScore {
    /// Returns whether the prediction was exact.
    #[must_use]
    pub const fn hit(&self) -> bool {
        self.predicted == self.won
    }
}

/// Scoring of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundScore {
    /// The round that was scored.
    pub round: usize,
    /// Per-player results, in roster order.
    pub players: Vec<PlayerScore>,
}
