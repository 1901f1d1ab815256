use log::debug;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::trick::Trick;

use super::Game;

impl Game {
    fn ensure_round_available(&self) -> Result<(), RoundError> {
        if self.round >= self.max_rounds {
            return Err(RoundError::RoundLimitExceeded {
                max: self.max_rounds,
            });
        }
        Ok(())
    }

    /// Starts the next round with a freshly shuffled deck.
    ///
    /// Deals as many cards to each player as the new round number, one card
    /// per player in seat order at a time. Outside the final round one more
    /// card is turned up as trump. The starting seat moves one to the left
    /// every round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::RoundLimitExceeded`] if every round has already
    /// been started. Check [`Game::is_game_complete`] first.
    pub fn start_round(&mut self) -> Result<(), RoundError> {
        self.ensure_round_available()?;
        let deck = Deck::shuffled(&mut self.rng);
        self.begin_round(deck);
        Ok(())
    }

    /// Starts the next round with a stacked deck instead of shuffling.
    ///
    /// The last card of `deck` is dealt first. Useful for replays and
    /// scripted tests.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::RoundLimitExceeded`] if every round has already
    /// been started, or [`RoundError::IncompleteDeck`] if `deck` is not the
    /// full 60-card deck.
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<(), RoundError> {
        self.ensure_round_available()?;
        if !deck.is_complete() {
            return Err(RoundError::IncompleteDeck);
        }
        self.begin_round(deck);
        Ok(())
    }

    fn begin_round(&mut self, deck: Deck) {
        self.round += 1;
        self.deck = deck;
        self.trick = Trick::new();
        self.played.clear();
        self.predictions.fill(None);
        self.tricks_won.fill(0);
        for hand in &mut self.hands {
            hand.clear();
        }

        self.deal();

        self.trump = if self.round < self.max_rounds {
            self.deck.draw()
        } else {
            None
        };

        let leader = (self.round - 1) % self.players.len();
        self.current_seat = Some(leader);

        debug!(
            "round {}/{} started, trump {:?}, {} leads",
            self.round, self.max_rounds, self.trump, self.players[leader]
        );
    }

    /// Deals round-robin: one card per player, `round` times.
    fn deal(&mut self) {
        for _ in 0..self.round {
            for hand in &mut self.hands {
                if let Some(card) = self.deck.draw() {
                    hand.add_card(card);
                }
            }
        }
    }
}
