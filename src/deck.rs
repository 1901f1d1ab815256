//! The 60-card Wizard deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS_PER_SUIT, SPECIALS_PER_KIND, Suit};

/// A deck of cards. Draws take the last card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck with all 60 cards.
    ///
    /// ```
    /// use wizrs::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ORDINARY {
            for rank in 1..=RANKS_PER_SUIT {
                cards.push(Card::new(suit, rank));
            }
        }

        for _ in 0..SPECIALS_PER_KIND {
            cards.push(Card::wizard());
            cards.push(Card::jester());
        }

        Self { cards }
    }

    /// Creates a full deck shuffled with the given generator.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Wraps an arbitrary list of cards. The last card is drawn first.
    ///
    /// No check is made here; use [`Deck::is_complete`] to verify the cards
    /// form a full Wizard deck.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck holds exactly the 60 Wizard cards, in any order.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if self.cards.len() != DECK_SIZE {
            return false;
        }

        let reference = Self::new();
        reference.cards.iter().all(|card| {
            let expected = reference.cards.iter().filter(|c| *c == card).count();
            let actual = self.cards.iter().filter(|c| *c == card).count();
            expected == actual
        })
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
