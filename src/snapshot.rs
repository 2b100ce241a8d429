//! Read-only view of the table for renderers.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Phase;
use crate::result::RoundResult;

/// Everything a renderer needs to draw the table after an intent.
///
/// Snapshots are owned copies; holding one does not borrow the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current phase.
    pub phase: Phase,
    /// Player cards in deal order.
    pub player_cards: Vec<Card>,
    /// Dealer cards in deal order, hole card included.
    pub dealer_cards: Vec<Card>,
    /// Whether the dealer's second card should be drawn face down.
    pub hole_card_hidden: bool,
    /// Player hand value.
    pub player_value: u8,
    /// Dealer value as the player may see it (up card only while hidden).
    pub dealer_value: u8,
    /// Ledger balance.
    pub balance: usize,
    /// Wager on the table.
    pub current_bet: usize,
    /// Status line.
    pub message: String,
    /// Result of the settled round, if any.
    pub result: Option<RoundResult>,
    /// Cards left in the deck.
    pub cards_remaining: usize,
    /// `deal` would be accepted (for some positive wager).
    pub can_deal: bool,
    /// `hit` would be accepted.
    pub can_hit: bool,
    /// `stand` would be accepted.
    pub can_stand: bool,
    /// `double_down` would be accepted.
    pub can_double: bool,
    /// The round is settled and waiting for `next_round`.
    pub can_start_next_round: bool,
}

impl Snapshot {
    /// Dealer cards as they should be shown: `None` stands for the face-down
    /// hole card.
    pub fn visible_dealer_cards(&self) -> impl Iterator<Item = Option<&Card>> {
        self.dealer_cards.iter().enumerate().map(|(index, card)| {
            if index == 1 && self.hole_card_hidden {
                None
            } else {
                Some(card)
            }
        })
    }

    /// Returns whether the round has been settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }
}
