//! Round state machine.

use alloc::string::String;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::{DealerHand, Hand};
use crate::ledger::Ledger;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::snapshot::Snapshot;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::Phase;

const NEXT_ROUND_MESSAGE: &str = "Press Deal to start the next round.";

/// A single-player blackjack table.
///
/// The game owns the deck, both hands, the ledger, and the random source.
/// Every intent takes `&mut self`, so only one can run at a time, and each one
/// either returns a fresh [`Snapshot`] or an error that left the game as it
/// was.
pub struct Game<R = ChaCha8Rng> {
    options: GameOptions,
    deck: Deck,
    phase: Phase,
    player_hand: Hand,
    dealer_hand: DealerHand,
    ledger: Ledger,
    doubled: bool,
    message: String,
    last_result: Option<RoundResult>,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Idle);
    /// assert_eq!(game.balance(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Game<R> {
    /// Creates a new game that shuffles with `rng`.
    pub fn with_rng(options: GameOptions, mut rng: R) -> Self {
        let deck = Deck::new(&mut rng);
        let ledger = Ledger::new(options.starting_balance);

        Self {
            options,
            deck,
            phase: Phase::Idle,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            ledger,
            doubled: false,
            message: String::new(),
            last_result: None,
            rng,
        }
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the ledger.
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the current balance.
    pub const fn balance(&self) -> usize {
        self.ledger.balance()
    }

    /// Returns the wager on the table.
    pub const fn current_bet(&self) -> usize {
        self.ledger.pending_wager()
    }

    /// Returns whether the player has doubled down this round.
    pub const fn has_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Replaces the deck, e.g. with a stacked one for a replay.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the result of the last settled round, until the next round
    /// starts.
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the current status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether doubling down is currently allowed.
    pub fn can_double(&self) -> bool {
        self.phase == Phase::PlayerTurn
            && self.player_hand.len() == 2
            && !self.doubled
            && self.ledger.balance() >= self.ledger.pending_wager()
    }

    /// Returns a read-only view of the table.
    pub fn snapshot(&self) -> Snapshot {
        let in_player_turn = self.phase == Phase::PlayerTurn;

        Snapshot {
            phase: self.phase,
            player_cards: self.player_hand.cards().to_vec(),
            dealer_cards: self.dealer_hand.cards().to_vec(),
            hole_card_hidden: self.dealer_hand.is_hole_hidden(),
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.visible_value(),
            balance: self.ledger.balance(),
            current_bet: self.ledger.pending_wager(),
            message: self.message.clone(),
            result: self.last_result,
            cards_remaining: self.deck.len(),
            can_deal: self.phase == Phase::Idle && self.ledger.balance() > 0,
            can_hit: in_player_turn,
            can_stand: in_player_turn,
            can_double: self.can_double(),
            can_start_next_round: self.phase == Phase::Settled,
        }
    }

    /// Clears the table and returns to [`Phase::Idle`].
    ///
    /// Accepted in any phase, so it doubles as a hard reset. The balance and
    /// the deck are left alone; an unsettled wager is not refunded.
    pub fn next_round(&mut self) -> Snapshot {
        if self.phase != Phase::Settled {
            log::warn!("resetting table from phase {:?}", self.phase);
        }

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.ledger.clear_wager();
        self.doubled = false;
        self.last_result = None;
        self.message = String::from(NEXT_ROUND_MESSAGE);
        self.phase = Phase::Idle;

        self.snapshot()
    }

    /// Draws a card, reshuffling first if the deck is below the low-water
    /// mark.
    fn draw_card(&mut self) -> Result<Card, DeckError> {
        self.deck
            .ensure_capacity(self.options.low_water_mark.max(1), &mut self.rng);
        self.deck
            .draw()
            .inspect_err(|err| log::error!("{err} right after a capacity check"))
    }
}
