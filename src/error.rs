//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck ran out of cards.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors raised by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The balance does not cover the amount.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur when dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress or has not been cleared.
    #[error("invalid phase for dealing")]
    InvalidPhase,
    /// Wager amount is zero.
    #[error("wager must be positive")]
    InvalidWager,
    /// Balance does not cover the wager.
    #[error("insufficient funds for this wager")]
    InsufficientFunds,
    /// Deck ran dry while dealing.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid phase for this action.
    #[error("invalid phase for this action")]
    InvalidPhase,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// Deck ran dry while drawing.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for DealError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::EmptyDeck,
        }
    }
}

impl From<LedgerError> for DealError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds => Self::InsufficientFunds,
        }
    }
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::EmptyDeck,
        }
    }
}

impl From<LedgerError> for ActionError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds => Self::InsufficientFunds,
        }
    }
}
