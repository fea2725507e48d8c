//! The player's five card hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ClassifyError, DrawError, HoldError, RedrawError};
use crate::evaluate;
use crate::result::WinningHand;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// A dealt hand and the player's hold marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in dealt order.
    cards: [Card; HAND_SIZE],
    /// Hold mark per position.
    held: [bool; HAND_SIZE],
    /// Set once the hand has been redrawn.
    locked: bool,
}

impl Hand {
    /// Creates a hand with nothing held.
    #[must_use]
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self {
            cards,
            held: [false; HAND_SIZE],
            locked: false,
        }
    }

    /// Creates a hand from a slice of exactly five cards.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::InvalidHandSize`] for any other length.
    pub fn from_slice(cards: &[Card]) -> Result<Self, ClassifyError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| ClassifyError::InvalidHandSize(cards.len()))?;
        Ok(Self::new(cards))
    }

    /// Deals five cards off the top of the deck.
    ///
    /// The deck is left untouched if it holds fewer than five cards.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck cannot cover the hand.
    pub fn deal(deck: &mut Deck) -> Result<Self, DrawError> {
        if deck.len() < HAND_SIZE {
            return Err(DrawError::EmptyDeck);
        }

        let mut cards = [deck.draw()?; HAND_SIZE];
        for slot in cards.iter_mut().skip(1) {
            *slot = deck.draw()?;
        }
        Ok(Self::new(cards))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns whether the card at `position` is held.
    #[must_use]
    pub fn is_held(&self, position: usize) -> bool {
        self.held.get(position).copied().unwrap_or(false)
    }

    /// Returns the number of held cards.
    #[must_use]
    pub fn held_count(&self) -> usize {
        self.held.iter().filter(|&&held| held).count()
    }

    /// Returns whether the hand has been redrawn.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Sets the hold mark on the card at `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the hand or the hand is
    /// locked.
    pub fn set_held(&mut self, position: usize, held: bool) -> Result<(), HoldError> {
        if self.locked {
            return Err(HoldError::Locked);
        }

        let mark = self
            .held
            .get_mut(position)
            .ok_or(HoldError::InvalidPosition(position))?;
        *mark = held;
        Ok(())
    }

    /// Flips the hold mark on the card at `position`.
    ///
    /// Returns the new mark.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the hand or the hand is
    /// locked.
    pub fn toggle_hold(&mut self, position: usize) -> Result<bool, HoldError> {
        let held = !self.is_held(position);
        self.set_held(position, held)?;
        Ok(held)
    }

    /// Replaces every card that is not held with the next card of the deck,
    /// then locks the hand.
    ///
    /// Returns the new cards in hand order. Hold marks are kept so the final
    /// hand still shows what was kept. Nothing changes if the hand is locked
    /// or the deck cannot cover every replacement.
    ///
    /// # Errors
    ///
    /// Returns [`RedrawError::Locked`] if the hand was already redrawn, or
    /// [`RedrawError::EmptyDeck`] if the deck runs short.
    pub fn redraw(&mut self, deck: &mut Deck) -> Result<Vec<Card>, RedrawError> {
        if self.locked {
            return Err(RedrawError::Locked);
        }

        let needed = HAND_SIZE - self.held_count();
        if deck.len() < needed {
            return Err(RedrawError::EmptyDeck);
        }

        let mut replaced = Vec::with_capacity(needed);
        for (slot, held) in self.cards.iter_mut().zip(self.held) {
            if held {
                continue;
            }
            let card = deck.draw()?;
            *slot = card;
            replaced.push(card);
        }

        self.locked = true;
        Ok(replaced)
    }

    /// Classifies the hand.
    #[must_use]
    pub fn evaluate(&self) -> WinningHand {
        evaluate::evaluate(&self.cards)
    }
}
