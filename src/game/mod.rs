//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::deck::Deck;
use crate::error::SetupError;
use crate::hand::Hand;
use crate::trick::Trick;

mod play;
mod predict;
mod round;
mod scoring;
pub mod state;

pub use scoring::round_points;
pub use state::{GameSnapshot, Phase, PlayedCard, PlayerSnapshot};

/// Fewest players a game accepts.
pub const MIN_PLAYERS: usize = 3;

/// Most players a game accepts.
pub const MAX_PLAYERS: usize = 6;

/// A Wizard game engine that manages the roster, rounds, tricks and scores.
///
/// The game owns the deck, every hand, and the trick in progress. Players are
/// addressed by the identifiers given at creation; seats follow that order.
/// Operations that fail leave the game unchanged.
#[derive(Debug, Clone)]
pub struct Game {
    /// Player identifiers in seat order.
    players: Vec<String>,
    /// Seat lookup by identifier.
    seats: HashMap<String, usize>,
    /// Current round number, 0 before the first round.
    round: usize,
    /// Last round of the game.
    max_rounds: usize,
    /// Undealt cards.
    deck: Deck,
    /// Card turned up after dealing.
    trump: Option<Card>,
    /// Seat whose turn it is.
    current_seat: Option<usize>,
    /// Cumulative scores by seat.
    scores: Vec<isize>,
    /// Predictions for the current round by seat.
    predictions: Vec<Option<usize>>,
    /// Tricks won this round by seat.
    tricks_won: Vec<usize>,
    /// Hands by seat.
    hands: Vec<Hand>,
    /// Trick in progress.
    trick: Trick,
    /// Cards from completed tricks this round.
    played: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game for the given players, shuffling with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 or more than 6 players, or if
    /// two players share an identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use wizrs::Game;
    ///
    /// let game = Game::new(["Ada", "Brian", "Cleo"], 42).unwrap();
    /// assert_eq!(game.max_rounds(), 20);
    /// ```
    pub fn new<I, S>(players: I, seed: u64) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(players, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game that shuffles with the given generator.
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    pub fn with_rng<I, S>(players: I, rng: ChaCha8Rng) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<String> = players.into_iter().map(Into::into).collect();
        let count = players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::InvalidPlayerCount(count));
        }

        let mut seats = HashMap::with_capacity(count);
        for (seat, name) in players.iter().enumerate() {
            if seats.insert(name.clone(), seat).is_some() {
                return Err(SetupError::DuplicatePlayer);
            }
        }

        Ok(Self {
            players,
            seats,
            round: 0,
            max_rounds: DECK_SIZE / count,
            deck: Deck::new(),
            trump: None,
            current_seat: None,
            scores: alloc::vec![0; count],
            predictions: alloc::vec![None; count],
            tricks_won: alloc::vec![0; count],
            hands: alloc::vec![Hand::new(); count],
            trick: Trick::new(),
            played: Vec::new(),
            rng,
        })
    }

    fn seat_of(&self, player: &str) -> Option<usize> {
        self.seats.get(player).copied()
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the number of rounds in this game (`60 / players`).
    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Returns the current round number, 0 before the first round.
    #[must_use]
    pub const fn current_round(&self) -> usize {
        self.round
    }

    /// Returns the trump card. There is none in the final round.
    #[must_use]
    pub const fn trump(&self) -> Option<Card> {
        self.trump
    }

    /// Returns the trump suit.
    ///
    /// A Wizard or Jester turned up as trump leaves the round without a trump
    /// suit.
    #[must_use]
    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump
            .map(|card| card.suit())
            .filter(|suit| !suit.is_special())
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&str> {
        self.current_seat
            .and_then(|seat| self.players.get(seat))
            .map(String::as_str)
    }

    /// Returns the cumulative score for the specified player.
    #[must_use]
    pub fn score(&self, player: &str) -> Option<isize> {
        self.seat_of(player).map(|seat| self.scores[seat])
    }

    /// Returns the player's prediction for the current round.
    ///
    /// Returns `None` if the player is unknown or has not predicted yet.
    #[must_use]
    pub fn prediction(&self, player: &str) -> Option<usize> {
        self.seat_of(player).and_then(|seat| self.predictions[seat])
    }

    /// Returns whether every player has predicted this round.
    #[must_use]
    pub fn predictions_complete(&self) -> bool {
        self.predictions.iter().all(Option::is_some)
    }

    /// Returns the number of tricks the player won this round.
    #[must_use]
    pub fn tricks_won(&self, player: &str) -> Option<usize> {
        self.seat_of(player).map(|seat| self.tricks_won[seat])
    }

    /// Returns the player's hand.
    #[must_use]
    pub fn hand(&self, player: &str) -> Option<&Hand> {
        self.seat_of(player).map(|seat| &self.hands[seat])
    }

    /// Returns the trick in progress.
    #[must_use]
    pub const fn current_trick(&self) -> &Trick {
        &self.trick
    }

    /// Returns the cards of the tricks completed this round.
    #[must_use]
    pub fn played_cards(&self) -> &[Card] {
        &self.played
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether every hand is empty.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.hands.iter().all(Hand::is_empty)
    }

    /// Returns whether the final round has been played out.
    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        self.round == self.max_rounds && self.is_round_complete()
    }

    /// Returns the current phase of the game.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.round == 0 {
            Phase::NotStarted
        } else if self.is_game_complete() {
            Phase::GameOver
        } else if self.is_round_complete() {
            Phase::RoundOver
        } else if !self.predictions_complete() {
            Phase::Predicting
        } else {
            Phase::Playing
        }
    }

    /// Returns the player with the highest score and that score.
    ///
    /// Ties go to the earliest seat.
    #[must_use]
    pub fn leader(&self) -> (&str, isize) {
        let mut best = 0;
        for (seat, &score) in self.scores.iter().enumerate() {
            if score > self.scores[best] {
                best = seat;
            }
        }
        (self.players[best].as_str(), self.scores[best])
    }

    /// Returns an owned copy of the full game state.
    #[must_use]
    pub fn game_state(&self) -> GameSnapshot {
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, name)| PlayerSnapshot {
                name: name.clone(),
                score: self.scores[seat],
                prediction: self.predictions[seat],
                tricks_won: self.tricks_won[seat],
                hand: self.hands[seat].cards().to_vec(),
            })
            .collect();

        let current_trick = self
            .trick
            .plays()
            .iter()
            .map(|play| PlayedCard {
                player: self.players[play.seat].clone(),
                card: play.card,
            })
            .collect();

        GameSnapshot {
            round: self.round,
            max_rounds: self.max_rounds,
            trump: self.trump,
            current_player: self.current_player().map(String::from),
            current_trick,
            players,
        }
    }
}
