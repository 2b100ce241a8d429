use alloc::vec::Vec;

use rand::RngCore;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::options::{DealerRule, RoundingMode};
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, Phase};

/// Total the dealer must reach before standing.
const DEALER_STANDS_ON: u8 = 17;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl<R: RngCore> Game<R> {
    fn dealer_should_draw(&self) -> bool {
        let value = self.dealer_hand.value();

        if value < DEALER_STANDS_ON {
            return true;
        }
        if value == DEALER_STANDS_ON
            && self.dealer_hand.is_soft()
            && !self.options.stand_on_soft_17
        {
            return true;
        }

        match self.options.dealer_rule {
            DealerRule::Standard => false,
            DealerRule::ChasePlayer => {
                let player_value = self.player_hand.value();
                value < player_value && player_value <= BLACKJACK
            }
        }
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher, standing on soft 17 unless the options say otherwise.
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        debug_assert_eq!(self.phase, Phase::DealerTurn);

        self.dealer_hand.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer_should_draw() {
            let card = self.draw_card()?;
            self.dealer_hand.add_card(card);
            log::debug!("dealer draws {card}, value {}", self.dealer_hand.value());
            drawn_cards.push(card);
        }

        Ok(drawn_cards)
    }

    /// Total credited for a natural: the wager back plus the blackjack bonus.
    pub(super) fn blackjack_payout(&self, wager: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = (wager as f64) * self.options.blackjack_pays;
        wager.saturating_add(round_amount(winnings, self.options.rounding_blackjack))
    }

    /// Compares the final hands and settles the round.
    pub(super) fn settle(&mut self) {
        let wager = self.ledger.pending_wager();
        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();

        let (outcome, payout) = if player_value > BLACKJACK {
            (RoundOutcome::PlayerBust, 0)
        } else if dealer_value > BLACKJACK {
            (RoundOutcome::DealerBust, wager.saturating_mul(2))
        } else if player_value > dealer_value {
            (RoundOutcome::PlayerWins, wager.saturating_mul(2))
        } else if player_value < dealer_value {
            (RoundOutcome::DealerWins, 0)
        } else {
            (RoundOutcome::Push, wager)
        };

        self.finish_round(outcome, payout);
    }

    /// Reveals the dealer, credits `payout`, and records the result.
    ///
    /// The pending wager stays on the ledger for display until the next round.
    pub(super) fn finish_round(&mut self, outcome: RoundOutcome, payout: usize) {
        self.dealer_hand.reveal_hole();
        self.ledger.credit(payout);

        let result = RoundResult {
            outcome,
            wager: self.ledger.pending_wager(),
            payout,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            doubled: self.doubled,
        };

        log::info!(
            "round settled: {outcome:?}, wager {}, payout {payout}, balance {}",
            result.wager,
            self.ledger.balance()
        );

        self.message = result.message();
        self.last_result = Some(result);
        self.phase = Phase::Settled;
    }
}
