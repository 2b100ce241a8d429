//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time: dealing,
//! player decisions, dealer play, and settlement against a [`Ledger`]. Every
//! intent returns a [`Snapshot`] for the presentation layer to render.
//!
//! # Example
//!
//! ```
//! use bjround::{Game, GameOptions, Phase};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let snapshot = game.deal(100).unwrap();
//! assert_eq!(snapshot.player_cards.len(), 2);
//!
//! if snapshot.phase == Phase::PlayerTurn {
//!     let snapshot = game.stand().unwrap();
//!     assert_eq!(snapshot.phase, Phase::Settled);
//! }
//! game.next_round();
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
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, LOW_WATER_MARK};
pub use error::{ActionError, DealError, DeckError, LedgerError};
pub use game::{Game, Phase};
pub use hand::{BLACKJACK, DealerHand, Hand, hand_value, is_blackjack, is_bust, is_soft};
pub use ledger::Ledger;
pub use options::{DealerRule, GameOptions, RoundingMode};
pub use result::{RoundOutcome, RoundResult};
pub use snapshot::Snapshot;
