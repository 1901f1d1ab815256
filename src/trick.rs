//! The trick in progress and trick resolution.

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// A card played into a trick, with the seat that played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    /// Seat index of the player, in roster order.
    pub seat: usize,
    /// The card played.
    pub card: Card,
}

/// Cards played so far in the current trick, in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trick {
    plays: Vec<Play>,
}

impl Trick {
    /// Creates an empty trick.
    #[must_use]
    pub const fn new() -> Self {
        Self { plays: Vec::new() }
    }

    /// Adds a card played by `seat`.
    pub fn push(&mut self, seat: usize, card: Card) {
        self.plays.push(Play { seat, card });
    }

    /// Returns the plays in order.
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Returns the cards in play order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.plays.iter().map(|p| p.card)
    }

    /// Returns the lead card.
    #[must_use]
    pub fn lead(&self) -> Option<Card> {
        self.plays.first().map(|p| p.card)
    }

    /// Returns the suit players must follow, if any.
    ///
    /// A trick led by a Wizard or Jester has no suit to follow.
    #[must_use]
    pub fn lead_suit(&self) -> Option<Suit> {
        self.lead()
            .map(|card| card.suit())
            .filter(|suit| !suit.is_special())
    }

    /// Returns the number of cards in the trick.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns whether no card has been played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Removes and returns all plays, leaving the trick empty.
    pub fn take(&mut self) -> Vec<Play> {
        core::mem::take(&mut self.plays)
    }

    /// Returns the position (index in play order) of the winning card.
    ///
    /// The first Wizard wins outright. A trick of nothing but Jesters goes to
    /// the leader. Otherwise Jesters are ignored and the remaining cards are
    /// compared in order: a card replaces the running winner only if it
    /// strictly beats it, either by being trump against a non-trump card or by
    /// outranking it within the same suit.
    ///
    /// Returns `None` for an empty trick.
    #[must_use]
    pub fn winning_position(&self, trump: Option<Suit>) -> Option<usize> {
        if self.plays.is_empty() {
            return None;
        }

        if let Some(position) = self.plays.iter().position(|p| p.card.is_wizard()) {
            return Some(position);
        }

        if self.plays.iter().all(|p| p.card.is_jester()) {
            return Some(0);
        }

        let mut winner: Option<(usize, Card)> = None;
        for (position, play) in self.plays.iter().enumerate() {
            if play.card.is_jester() {
                continue;
            }
            match winner {
                Some((_, best)) if !beats(play.card, best, trump) => {}
                _ => winner = Some((position, play.card)),
            }
        }

        winner.map(|(position, _)| position)
    }

    /// Returns the winning play.
    #[must_use]
    pub fn winner(&self, trump: Option<Suit>) -> Option<Play> {
        self.winning_position(trump)
            .and_then(|i| self.plays.get(i).copied())
    }
}

/// Returns whether `challenger` strictly beats `best` (neither is a Jester or Wizard).
fn beats(challenger: Card, best: Card, trump: Option<Suit>) -> bool {
    let is_trump = |card: Card| trump.is_some_and(|t| card.suit() == t);

    if is_trump(challenger) && !is_trump(best) {
        return true;
    }

    challenger.suit() == best.suit() && challenger.number() > best.number()
}
