use alloc::vec::Vec;

use log::{debug, trace};

use crate::card::{Card, Suit};
use crate::error::PlayError;
use crate::hand::Hand;
use crate::result::{PlayOutcome, TrickResult};

use super::Game;

/// Checks the follow-suit rule for playing `card` from `hand`.
///
/// Wizards and Jesters may always be played. Ordinary cards must match the
/// lead suit when the hand holds that suit.
fn follows_suit(hand: &Hand, card: Card, lead: Option<Suit>) -> bool {
    if card.is_special() {
        return true;
    }
    lead.is_none_or(|suit| card.suit() == suit || !hand.has_suit(suit))
}

impl Game {
    /// Returns the cards the player may legally play into the current trick.
    ///
    /// This only applies the follow-suit rule; it does not check whose turn
    /// it is. Returns `None` if the player is not part of the game.
    #[must_use]
    pub fn playable_cards(&self, player: &str) -> Option<Vec<Card>> {
        let seat = self.seat_of(player)?;
        let hand = &self.hands[seat];
        let lead = self.trick.lead_suit();
        Some(
            hand.cards()
                .iter()
                .copied()
                .filter(|&card| follows_suit(hand, card, lead))
                .collect(),
        )
    }

    /// Plays a card from the player's hand into the current trick.
    ///
    /// When the card completes the trick, the winner is determined, credited
    /// with the trick, and leads the next one. Otherwise the turn passes to
    /// the next seat.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn (including unknown
    /// players and no round in progress), the card is not in the player's
    /// hand, or the player holds the lead suit and plays another ordinary
    /// suit.
    pub fn play_card(&mut self, player: &str, card: Card) -> Result<PlayOutcome, PlayError> {
        let seat = self
            .seat_of(player)
            .filter(|&seat| self.current_seat == Some(seat))
            .ok_or(PlayError::NotYourTurn)?;

        let hand = &self.hands[seat];
        if !hand.contains(&card) {
            return Err(PlayError::CardNotInHand);
        }
        if !follows_suit(hand, card, self.trick.lead_suit()) {
            return Err(PlayError::MustFollowSuit);
        }

        self.hands[seat].remove(&card);
        self.trick.push(seat, card);
        trace!("{player} plays {card}");

        if self.trick.len() == self.players.len() {
            if let Some(result) = self.resolve_trick() {
                return Ok(PlayOutcome::TrickComplete(result));
            }
        }

        let next = (seat + 1) % self.players.len();
        self.current_seat = Some(next);
        Ok(PlayOutcome::NextPlayer(self.players[next].clone()))
    }

    /// Awards the full trick to its winner and clears it.
    fn resolve_trick(&mut self) -> Option<TrickResult> {
        let winner = self.trick.winner(self.trump_suit())?;
        let cards: Vec<Card> = self.trick.take().into_iter().map(|p| p.card).collect();

        self.tricks_won[winner.seat] += 1;
        self.played.extend_from_slice(&cards);
        self.current_seat = Some(winner.seat);

        let name = self.players[winner.seat].clone();
        debug!("{name} wins the trick with {}", winner.card);

        Some(TrickResult {
            winner: name,
            winning_card: winner.card,
            cards,
        })
    }
}
