//! Card types and deck constants.

use core::fmt;

/// Card suit.
///
/// The four colored suits are ordinary suits. Wizards and Jesters carry
/// [`Suit::Special`], which never acts as a lead or trump suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Marker suit for Wizards and Jesters.
    Special,
}

impl Suit {
    /// The four ordinary suits, in deck-building order.
    pub const ORDINARY: [Self; 4] = [Self::Blue, Self::Green, Self::Red, Self::Yellow];

    /// Returns whether this is the special marker suit.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Self::Special)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Special => "Special",
        };
        f.write_str(name)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// An ordinary rank from 1 to 13.
    Number(u8),
    /// Wins the trick it is played in unless an earlier Wizard was played.
    Wizard,
    /// Never wins a trick unless every card in it is a Jester.
    Jester,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Creates an ordinary card.
    ///
    /// Note: This function does not validate its input. `suit` is expected to
    /// be one of [`Suit::ORDINARY`] and `rank` to lie in `1..=13`; other
    /// values produce a card that does not exist in the Wizard deck.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank: Rank::Number(rank),
        }
    }

    /// Creates a Wizard.
    #[must_use]
    pub const fn wizard() -> Self {
        Self {
            suit: Suit::Special,
            rank: Rank::Wizard,
        }
    }

    /// Creates a Jester.
    #[must_use]
    pub const fn jester() -> Self {
        Self {
            suit: Suit::Special,
            rank: Rank::Jester,
        }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the numeric rank of an ordinary card.
    #[must_use]
    pub const fn number(&self) -> Option<u8> {
        match self.rank {
            Rank::Number(n) => Some(n),
            Rank::Wizard | Rank::Jester => None,
        }
    }

    /// Returns whether the card is a Wizard.
    #[must_use]
    pub const fn is_wizard(&self) -> bool {
        matches!(self.rank, Rank::Wizard)
    }

    /// Returns whether the card is a Jester.
    #[must_use]
    pub const fn is_jester(&self) -> bool {
        matches!(self.rank, Rank::Jester)
    }

    /// Returns whether the card is a Wizard or a Jester.
    #[must_use]
    pub const fn is_special(&self) -> bool {
        self.suit.is_special()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            Rank::Number(n) => write!(f, "{} {n}", self.suit),
            Rank::Wizard => f.write_str("Wizard"),
            Rank::Jester => f.write_str("Jester"),
        }
    }
}

/// Number of ranks in each ordinary suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of Wizards (and, separately, of Jesters) in the deck.
pub const SPECIALS_PER_KIND: usize = 4;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 60;
