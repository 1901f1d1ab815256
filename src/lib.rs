//! A rules engine for the Wizard trick-taking card game with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that runs a full game for 3 to 6
//! players: dealing, predictions, trick play with Wizards, Jesters and trump,
//! and scoring. Input and output are left to the caller.
//!
//! # Example
//!
//! ```
//! use wizrs::{Game, PlayOutcome};
//!
//! let mut game = Game::new(["Ada", "Brian", "Cleo"], 42).unwrap();
//! game.start_round().unwrap();
//!
//! for player in ["Ada", "Brian", "Cleo"] {
//!     game.make_prediction(player, 0).unwrap();
//! }
//!
//! while !game.is_round_complete() {
//!     let player = game.current_player().unwrap().to_owned();
//!     let card = game.playable_cards(&player).unwrap()[0];
//!     if let PlayOutcome::TrickComplete(trick) = game.play_card(&player, card).unwrap() {
//!         println!("{} takes the trick", trick.winner);
//!     }
//! }
//!
//! let scores = game.calculate_round_scores().unwrap();
//! assert_eq!(scores.players.len(), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod trick;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ErrorKind, PlayError, PredictionError, RoundError, ScoreError, SetupError};
pub use game::{
    Game, GameSnapshot, MAX_PLAYERS, MIN_PLAYERS, Phase, PlayedCard, PlayerSnapshot, round_points,
};
pub use hand::Hand;
pub use result::{PlayOutcome, PlayerScore, RoundScore, TrickResult};
pub use trick::{Play, Trick};
