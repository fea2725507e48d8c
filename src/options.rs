//! Table configuration options.

/// Configuration options for a draw poker table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use drawpoker::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_balance(500)
///     .with_bet_cost(5)
///     .with_fresh_deck_each_round(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Credits the player starts with.
    pub starting_balance: usize,
    /// Credits charged per round. Payouts are the pay table multiplier times
    /// this amount.
    pub bet_cost: usize,
    /// Whether every round is dealt from a newly built and shuffled deck.
    ///
    /// When disabled, the deck carries over between rounds until it can no
    /// longer cover a full round.
    pub fresh_deck_each_round: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_balance: 100,
            bet_cost: 1,
            fresh_deck_each_round: true,
        }
    }
}

impl TableOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use drawpoker::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_balance(20);
    /// assert_eq!(options.starting_balance, 20);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the credits charged per round.
    ///
    /// # Example
    ///
    /// ```
    /// use drawpoker::TableOptions;
    ///
    /// let options = TableOptions::default().with_bet_cost(5);
    /// assert_eq!(options.bet_cost, 5);
    /// ```
    #[must_use]
    pub const fn with_bet_cost(mut self, cost: usize) -> Self {
        self.bet_cost = cost;
        self
    }

    /// Sets whether every round gets a fresh deck.
    ///
    /// # Example
    ///
    /// ```
    /// use drawpoker::TableOptions;
    ///
    /// let options = TableOptions::default().with_fresh_deck_each_round(false);
    /// assert_eq!(options.fresh_deck_each_round, false);
    /// ```
    #[must_use]
    pub const fn with_fresh_deck_each_round(mut self, fresh: bool) -> Self {
        self.fresh_deck_each_round = fresh;
        self
    }
}
