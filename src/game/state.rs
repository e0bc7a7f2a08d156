//! Game state types.

/// Game state.
///
/// A round moves `Betting → Dealing → PlayerTurn → DealerTurn → RoundOver`
/// and back to `Betting` once settled. A natural on the deal jumps straight
/// from `Dealing` to `RoundOver`; quitting the round returns from
/// `PlayerTurn` to `Betting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Accepting a bet for the next round.
    Betting,
    /// Bet placed, waiting for the initial deal.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be settled.
    RoundOver,
}
