//! The fixed Jacks or Better pay table.

use core::fmt;

/// A hand category, in pay table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    /// Ace, ten, jack, queen, and king of one suit.
    RoyalFlush,
    /// Five consecutive ranks of one suit.
    StraightFlush,
    /// Four cards of one rank.
    FourOfAKind,
    /// Three of one rank and two of another.
    FullHouse,
    /// Five cards of one suit.
    Flush,
    /// Five consecutive ranks.
    Straight,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Two pairs.
    TwoPair,
    /// A single pair of jacks, queens, or kings.
    JacksOrBetter,
    /// No paying hand.
    Nothing,
}

/// Every category from highest to lowest payout.
///
/// Hands are checked in this order and the first match wins.
pub const PAY_TABLE: [HandCategory; 10] = [
    HandCategory::RoyalFlush,
    HandCategory::StraightFlush,
    HandCategory::FourOfAKind,
    HandCategory::FullHouse,
    HandCategory::Flush,
    HandCategory::Straight,
    HandCategory::ThreeOfAKind,
    HandCategory::TwoPair,
    HandCategory::JacksOrBetter,
    HandCategory::Nothing,
];

impl HandCategory {
    /// Payout multiplier for a one credit bet.
    #[must_use]
    pub const fn multiplier(self) -> usize {
        match self {
            Self::RoyalFlush => 800,
            Self::StraightFlush => 50,
            Self::FourOfAKind => 25,
            Self::FullHouse => 9,
            Self::Flush => 6,
            Self::Straight => 4,
            Self::ThreeOfAKind => 3,
            Self::TwoPair => 2,
            Self::JacksOrBetter => 1,
            Self::Nothing => 0,
        }
    }

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::RoyalFlush => "Royal Flush",
            Self::StraightFlush => "Straight Flush",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::Flush => "Flush",
            Self::Straight => "Straight",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::TwoPair => "Two Pair",
            Self::JacksOrBetter => "Jacks or Better",
            Self::Nothing => "Nothing",
        }
    }

    /// Looks up the category paying `multiplier`.
    ///
    /// # Example
    ///
    /// ```
    /// use drawpoker::HandCategory;
    ///
    /// assert_eq!(HandCategory::from_multiplier(9), Some(HandCategory::FullHouse));
    /// assert_eq!(HandCategory::from_multiplier(7), None);
    /// ```
    #[must_use]
    pub fn from_multiplier(multiplier: usize) -> Option<Self> {
        PAY_TABLE
            .into_iter()
            .find(|category| category.multiplier() == multiplier)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Returns the title of the category paying `multiplier`, if any.
///
/// ```
/// assert_eq!(drawpoker::title_for(800), Some("Royal Flush"));
/// assert_eq!(drawpoker::title_for(0), Some("Nothing"));
/// assert_eq!(drawpoker::title_for(5), None);
/// ```
#[must_use]
pub fn title_for(multiplier: usize) -> Option<&'static str> {
    HandCategory::from_multiplier(multiplier).map(HandCategory::title)
}
