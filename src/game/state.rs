//! Game phase and read-only snapshot types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Where the game currently stands.
///
/// The phase is derived from the game's state; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round has been started yet.
    NotStarted,
    /// Cards are dealt and some players have not predicted yet.
    Predicting,
    /// Every player has predicted and tricks are being played.
    Playing,
    /// All hands are empty; the round can be scored and the next one started.
    RoundOver,
    /// The final round is over.
    GameOver,
}

/// A card in the current trick, with the player who played it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedCard {
    /// The player.
    pub player: String,
    /// The card.
    pub card: Card,
}

/// Per-player part of a [`GameSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// The player.
    pub name: String,
    /// Cumulative score.
    pub score: isize,
    /// Prediction for the current round, if made.
    pub prediction: Option<usize>,
    /// Tricks won in the current round.
    pub tricks_won: usize,
    /// Cards in hand.
    pub hand: Vec<Card>,
}

/// An owned copy of the full game state, for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Current round number (0 before the first round).
    pub round: usize,
    /// Number of rounds in the game.
    pub max_rounds: usize,
    /// The trump card, if any.
    pub trump: Option<Card>,
    /// The player whose turn it is.
    pub current_player: Option<String>,
    /// Cards in the current trick, in play order.
    pub current_trick: Vec<PlayedCard>,
    /// Players in roster order.
    pub players: Vec<PlayerSnapshot>,
}
