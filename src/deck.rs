//! The card source: a single shuffled 52-card deck.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Remaining-card count below which the deck is replaced before a draw.
pub const LOW_WATER_MARK: usize = 15;

/// An ordered deck of cards, drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a full 52-card deck and shuffles it with `rng`.
    ///
    /// Cards are generated suit by suit (♠, ♥, ♦, ♣), Ace through King, and
    /// then permuted with a Fisher-Yates shuffle.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards.shuffle(rng);
        Self {
            cards: cards.into(),
        }
    }

    /// Creates a stacked deck whose first card is drawn first.
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Draws the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left. Callers are expected
    /// to call [`Deck::ensure_capacity`] first, so this indicates a bug.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Replaces the deck with a freshly shuffled one if fewer than `minimum`
    /// cards remain.
    ///
    /// The undrawn remainder is discarded. Cards already dealt out are not
    /// affected. Returns `true` if a reshuffle happened.
    pub fn ensure_capacity<R: Rng + ?Sized>(&mut self, minimum: usize, rng: &mut R) -> bool {
        if self.cards.len() >= minimum {
            return false;
        }

        log::info!(
            "deck down to {} cards (minimum {minimum}), reshuffling",
            self.cards.len()
        );
        *self = Self::new(rng);
        true
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards in draw order.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.cards.iter()
    }
}
