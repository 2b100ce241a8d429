//! Round phase.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No round in progress; waiting for a wager.
    #[default]
    Idle,
    /// Initial cards are being dealt. Never observed between intents.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand. Never observed between intents.
    DealerTurn,
    /// Round has been settled; waiting for the next round.
    Settled,
}
