use log::{debug, info};

use crate::deck::Deck;
use crate::error::{BetError, FinishError, HoldError, RedrawError};
use crate::hand::{HAND_SIZE, Hand};
use crate::paytable::HandCategory;
use crate::result::{RoundResult, WinningHand};

use super::{Game, RoundState};

impl Game {
    fn ensure_can_bet(&self) -> Result<(), BetError> {
        if self.state != RoundState::AwaitingBet {
            return Err(BetError::InvalidState);
        }

        let cost = self.options.bet_cost;
        if self.balance < cost {
            return Err(BetError::InsufficientFunds);
        }

        // The best hand must pay out without overflowing the balance or the
        // signed net.
        let top_payout = HandCategory::RoyalFlush
            .multiplier()
            .checked_mul(cost)
            .filter(|&payout| isize::try_from(payout).is_ok())
            .ok_or(BetError::BetTooLarge)?;
        if (self.balance - cost).checked_add(top_payout).is_none() {
            return Err(BetError::BetTooLarge);
        }

        Ok(())
    }

    fn hand_awaiting_redraw(&mut self) -> Result<&mut Hand, HoldError> {
        if self.state != RoundState::AwaitingRedraw {
            return Err(HoldError::InvalidState);
        }
        self.hand.as_mut().ok_or(HoldError::InvalidState)
    }

    /// Pays for a round and deals five cards.
    ///
    /// The deck is rebuilt and shuffled first, unless the table carries decks
    /// over and the current one still covers a full round. Returns the
    /// classification of the dealt hand so a paying hand can be pointed out
    /// before the redraw.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a bet, the player
    /// cannot cover the bet cost, or the cost is too large to pay out.
    pub fn bet(&mut self) -> Result<WinningHand, BetError> {
        self.ensure_can_bet()?;
        let deck = self.next_deck();
        self.bet_with_deck(deck)
    }

    /// Pays for a round and deals five cards from the given deck.
    ///
    /// The deck is dealt as is, without shuffling, and the redraw draws from
    /// it as well.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a bet, the player
    /// cannot cover the bet cost, the cost is too large to pay out, or the
    /// deck holds fewer than five cards.
    pub fn bet_with_deck(&mut self, mut deck: Deck) -> Result<WinningHand, BetError> {
        self.ensure_can_bet()?;

        if deck.len() < HAND_SIZE {
            return Err(BetError::NotEnoughCards);
        }

        let hand = Hand::deal(&mut deck).map_err(|_| BetError::NotEnoughCards)?;

        let cost = self.options.bet_cost;
        self.balance -= cost;
        self.bet = cost;
        self.deck = deck;
        self.result = None;
        self.state = RoundState::HandDealt;
        debug!("bet {cost}, balance {}", self.balance);

        let initial = hand.evaluate();
        self.hand = Some(hand);
        self.initial = Some(initial.clone());
        self.state = RoundState::AwaitingRedraw;
        debug!("dealt {}, awaiting redraw", initial.category());

        Ok(initial)
    }

    /// Flips the hold mark on the card at `position`.
    ///
    /// Returns whether the card is now held.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting the redraw or the position
    /// is outside the hand.
    pub fn toggle_hold(&mut self, position: usize) -> Result<bool, HoldError> {
        self.hand_awaiting_redraw()?.toggle_hold(position)
    }

    /// Sets the hold mark on the card at `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting the redraw or the position
    /// is outside the hand.
    pub fn set_held(&mut self, position: usize, held: bool) -> Result<(), HoldError> {
        self.hand_awaiting_redraw()?.set_held(position, held)
    }

    /// Replaces every card that is not held, classifies the final hand, and
    /// credits the payout.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting the redraw or the deck
    /// cannot cover the replacements. The round stays open in that case.
    pub fn redraw(&mut self) -> Result<RoundResult, RedrawError> {
        if self.state != RoundState::AwaitingRedraw {
            return Err(RedrawError::InvalidState);
        }

        let initial = self.initial.clone().ok_or(RedrawError::InvalidState)?;
        let hand = self.hand.as_mut().ok_or(RedrawError::InvalidState)?;

        let replaced = hand.redraw(&mut self.deck)?;
        let outcome = hand.evaluate();

        // Bounded by the check in `ensure_can_bet`.
        let bet = self.bet;
        let payout = outcome.multiplier() * bet;
        self.balance += payout;

        let net = isize::try_from(payout)
            .unwrap_or(isize::MAX)
            .saturating_sub(isize::try_from(bet).unwrap_or(isize::MAX));

        info!(
            "{} pays {payout} on a bet of {bet}, balance {}",
            outcome.category(),
            self.balance
        );

        let result = RoundResult {
            initial,
            outcome,
            replaced,
            bet,
            payout,
            net,
            balance: self.balance,
        };
        self.result = Some(result.clone());
        self.state = RoundState::RoundResolved;

        Ok(result)
    }

    /// Clears the table after a resolved round and waits for the next bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been resolved.
    pub fn finish(&mut self) -> Result<(), FinishError> {
        if self.state != RoundState::RoundResolved {
            return Err(FinishError::InvalidState);
        }

        self.hand = None;
        self.initial = None;
        self.result = None;
        self.bet = 0;
        self.state = RoundState::AwaitingBet;
        debug!("round cleared");

        Ok(())
    }
}
