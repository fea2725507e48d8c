//! A Jacks or Better draw poker engine with optional `no_std` support.
//!
//! The crate provides the deck model, a hand classifier scored against a fixed
//! pay table, and a [`Game`] type that runs the bet, hold, redraw, and payout
//! flow of a single-player table.
//!
//! # Example
//!
//! ```
//! use drawpoker::{Card, HandCategory, Suit, classify};
//!
//! let hand = [
//!     Card::new(Suit::Hearts, 1),
//!     Card::new(Suit::Hearts, 10),
//!     Card::new(Suit::Hearts, 11),
//!     Card::new(Suit::Hearts, 12),
//!     Card::new(Suit::Hearts, 13),
//! ];
//! let result = classify(&hand).unwrap();
//! assert_eq!(result.category(), HandCategory::RoyalFlush);
//! assert_eq!(result.multiplier(), 800);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod evaluate;
pub mod game;
pub mod hand;
pub mod options;
pub mod paytable;
pub mod result;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, Suit};
pub use deck::Deck;
pub use error::{
    BetError, ClassifyError, DrawError, FinishError, HoldError, RedrawError, ReshuffleError,
};
pub use evaluate::classify;
pub use game::{CARDS_PER_ROUND, Game, RoundState};
pub use hand::{HAND_SIZE, Hand};
pub use options::TableOptions;
pub use paytable::{HandCategory, PAY_TABLE, title_for};
pub use result::{RoundResult, WinningHand};
