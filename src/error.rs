//! Error types for deck, classification, and round operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when classifying a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The hand does not hold exactly five cards.
    #[error("a hand must hold exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
}

/// Errors that can occur when placing a bet and dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The top payout for this bet cost would not fit the balance.
    #[error("bet cost too large to pay out")]
    BetTooLarge,
    /// The deck cannot cover a full round.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when marking held cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HoldError {
    /// Invalid game state for holding cards.
    #[error("invalid game state for holding cards")]
    InvalidState,
    /// Position outside the hand.
    #[error("no card at position {0}")]
    InvalidPosition(usize),
    /// The hand was already redrawn.
    #[error("hand is locked")]
    Locked,
}

/// Errors that can occur during the redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RedrawError {
    /// Invalid game state for the redraw.
    #[error("invalid game state for the redraw")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// The hand was already redrawn.
    #[error("hand is locked")]
    Locked,
}

impl From<DrawError> for RedrawError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::EmptyDeck,
        }
    }
}

/// Errors that can occur when finishing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FinishError {
    /// The round has not been resolved yet.
    #[error("invalid game state for finishing the round")]
    InvalidState,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}
