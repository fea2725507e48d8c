//! Classification and round result types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::paytable::HandCategory;

/// The outcome of classifying a hand.
///
/// A hand that pays nothing has category [`HandCategory::Nothing`], a zero
/// multiplier, and no contributing cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningHand {
    category: HandCategory,
    cards: Vec<Card>,
}

impl WinningHand {
    pub(crate) const fn new(category: HandCategory, cards: Vec<Card>) -> Self {
        Self { category, cards }
    }

    pub(crate) const fn nothing() -> Self {
        Self {
            category: HandCategory::Nothing,
            cards: Vec::new(),
        }
    }

    /// The matched category.
    #[must_use]
    pub const fn category(&self) -> HandCategory {
        self.category
    }

    /// Payout multiplier for a one credit bet.
    #[must_use]
    pub const fn multiplier(&self) -> usize {
        self.category.multiplier()
    }

    /// Display title of the matched category.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.category.title()
    }

    /// The cards that make the category.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand pays anything.
    #[must_use]
    pub const fn is_winning(&self) -> bool {
        self.category.multiplier() > 0
    }

    /// Returns whether `card` contributes to the category.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Classification of the dealt hand, before the redraw.
    pub initial: WinningHand,
    /// Classification of the final hand.
    pub outcome: WinningHand,
    /// Cards drawn to replace the ones that were not held.
    pub replaced: Vec<Card>,
    /// Credits wagered.
    pub bet: usize,
    /// Credits won (multiplier times bet).
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// Balance after the payout.
    pub balance: usize,
}
