//! A single 52-card deck.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::trace;
use rand::Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DrawError;

/// An ordered deck of cards. The front of the deck is the next card drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds the 52 canonical cards.
    ///
    /// Cards are ordered suit-major (hearts, spades, clubs, diamonds) and by
    /// rank 1..=13 within each suit. No randomness is involved.
    ///
    /// # Example
    ///
    /// ```
    /// use drawpoker::{Card, Deck, Suit};
    ///
    /// let mut deck = Deck::build();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.draw(), Ok(Card::new(Suit::Hearts, 1)));
    /// ```
    #[must_use]
    pub fn build() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck holding exactly the given cards, first card on top.
    ///
    /// Useful for replaying a known deal.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Shuffles the remaining cards in place.
    ///
    /// Fisher-Yates from the top: each position `i` is swapped with a
    /// position picked uniformly from `i..len`.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let cards = self.cards.make_contiguous();
        let n = cards.len();

        for i in 0..n.saturating_sub(1) {
            let r = rng.random_range(i..n);
            cards.swap(i, r);
        }

        trace!("shuffled {n} cards");
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let card = self.cards.pop_front().ok_or(DrawError::EmptyDeck)?;
        trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards, top first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}
