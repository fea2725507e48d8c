//! Round state types.

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Waiting for the player to bet.
    AwaitingBet,
    /// Five cards are out but not yet classified.
    ///
    /// Only held while [`Game::bet`](crate::Game::bet) runs; callers never
    /// observe it between operations.
    HandDealt,
    /// Waiting for the player to mark held cards and redraw.
    AwaitingRedraw,
    /// The final hand has been paid and waits to be cleared.
    RoundResolved,
}
