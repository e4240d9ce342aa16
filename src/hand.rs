//! Player and dealer hands.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Totals above this value are a bust.
pub const BUST_LIMIT: u32 = 21;

/// Sums the card values of a hand.
///
/// There is no ace or face-card handling: every card counts at face value and
/// the total is unbounded.
#[must_use]
pub fn hand_value(cards: &[u8]) -> u32 {
    cards.iter().map(|&card| u32::from(card)).sum()
}

/// An ordered, append-only sequence of card values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<u8>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: u8) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were drawn.
    #[must_use]
    pub fn cards(&self) -> &[u8] {
        &self.cards
    }

    /// Returns the first card, which is the dealer's visible card.
    #[must_use]
    pub fn up_card(&self) -> Option<u8> {
        self.cards.first().copied()
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BUST_LIMIT
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<u8>> for Hand {
    fn from(cards: Vec<u8>) -> Self {
        Self { cards }
    }
}

/// Formats the cards as `10, 7, 3`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
