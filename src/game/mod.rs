//! Game engine and round state management.

use core::mem;

use log::trace;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::ReshuffleError;
use crate::hand::{HAND_SIZE, Hand};
use crate::options::TableOptions;
use crate::result::{RoundResult, WinningHand};

mod round;
pub mod state;

pub use state::RoundState;

/// Most cards a single round can draw: the deal plus a full redraw.
pub const CARDS_PER_ROUND: usize = HAND_SIZE * 2;

/// A single-player draw poker table.
///
/// The game owns the deck, the player's balance, and the hand of the round in
/// progress. Use [`TableOptions`] to configure the balance, bet cost, and deck
/// policy.
#[derive(Debug, Clone)]
pub struct Game {
    /// Table options.
    pub options: TableOptions,
    /// Current round state.
    state: RoundState,
    /// Player credits.
    balance: usize,
    /// Credits wagered on the round in progress.
    bet: usize,
    /// Deck the round draws from.
    deck: Deck,
    /// Hand of the round in progress.
    hand: Option<Hand>,
    /// Classification of the hand as dealt.
    initial: Option<WinningHand>,
    /// Result of the last resolved round, until it is cleared.
    result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use drawpoker::{Game, RoundState, TableOptions};
    ///
    /// let options = TableOptions::default().with_starting_balance(50);
    /// let game = Game::new(options, 42);
    /// assert_eq!(game.state(), RoundState::AwaitingBet);
    /// assert_eq!(game.balance(), 50);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::create_deck(&mut rng);

        Self {
            balance: options.starting_balance,
            options,
            state: RoundState::AwaitingBet,
            bet: 0,
            deck,
            hand: None,
            initial: None,
            result: None,
            rng,
        }
    }

    /// Builds and shuffles a fresh deck.
    fn create_deck(rng: &mut ChaCha8Rng) -> Deck {
        let mut deck = Deck::build();
        deck.shuffle(rng);
        deck
    }

    /// Replaces the deck with a freshly shuffled one.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is waiting for a bet.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.state != RoundState::AwaitingBet {
            return Err(ReshuffleError::InvalidState);
        }

        self.deck = Self::create_deck(&mut self.rng);
        trace!("deck reshuffled");

        Ok(())
    }

    /// Returns whether the next round will be dealt from a new deck.
    ///
    /// Always `true` with [`TableOptions::fresh_deck_each_round`]; otherwise
    /// only once the deck can no longer cover a full round.
    pub fn needs_new_deck(&self) -> bool {
        self.options.fresh_deck_each_round || self.deck.len() < CARDS_PER_ROUND
    }

    /// Takes the deck for the next round, rebuilding it if needed.
    fn next_deck(&mut self) -> Deck {
        if self.needs_new_deck() {
            trace!("building a new deck");
            Self::create_deck(&mut self.rng)
        } else {
            mem::replace(&mut self.deck, Deck::empty())
        }
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's credits.
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the credits wagered on the round in progress.
    pub const fn current_bet(&self) -> usize {
        self.bet
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the hand of the round in progress.
    pub const fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Returns the classification of the hand as it was dealt.
    ///
    /// Presentation layers use it to hint at a paying hand before the redraw.
    pub const fn initial_outcome(&self) -> Option<&WinningHand> {
        self.initial.as_ref()
    }

    /// Returns the result of the resolved round, if any.
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }
}
