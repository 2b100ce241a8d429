use rand::RngCore;

use crate::error::DealError;
use crate::result::RoundOutcome;
use crate::snapshot::Snapshot;

use super::{Game, Phase};

/// Cards dealt at the start of a round.
const INITIAL_CARDS: usize = 4;

impl<R: RngCore> Game<R> {
    /// Places `wager` and deals a new round.
    ///
    /// Cards go player, dealer, player, dealer; the dealer's second card is the
    /// hole card. Naturals are settled on the spot: a player blackjack pays
    /// according to [`GameOptions::blackjack_pays`], a dealer blackjack takes
    /// the wager, and two blackjacks push. Otherwise the round moves to
    /// [`Phase::PlayerTurn`].
    ///
    /// [`GameOptions::blackjack_pays`]: crate::GameOptions::blackjack_pays
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already on the table, the wager is zero,
    /// or the balance does not cover it. The game is unchanged in each case.
    pub fn deal(&mut self, wager: usize) -> Result<Snapshot, DealError> {
        if self.phase != Phase::Idle {
            log::warn!("deal rejected in phase {:?}", self.phase);
            return Err(DealError::InvalidPhase);
        }

        if wager == 0 {
            return Err(DealError::InvalidWager);
        }

        if self.ledger.balance() < wager {
            log::warn!(
                "wager {wager} declined, balance is {}",
                self.ledger.balance()
            );
            return Err(DealError::InsufficientFunds);
        }

        // One capacity check covers all four cards so they come off a single
        // sequence.
        self.deck.ensure_capacity(
            self.options.low_water_mark.max(INITIAL_CARDS),
            &mut self.rng,
        );

        let player_first = self.deck.draw()?;
        let dealer_up = self.deck.draw()?;
        let player_second = self.deck.draw()?;
        let dealer_hole = self.deck.draw()?;

        self.phase = Phase::Dealing;
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.doubled = false;
        self.last_result = None;
        self.message.clear();

        self.player_hand.add_card(player_first);
        self.dealer_hand.add_card(dealer_up);
        self.player_hand.add_card(player_second);
        self.dealer_hand.add_card(dealer_hole);

        self.ledger.commit_wager(wager)?;

        log::debug!(
            "dealt {player_first} {player_second} against {dealer_up}, wager {wager}"
        );

        let player_blackjack = self.player_hand.is_blackjack();
        let dealer_blackjack = self.dealer_hand.is_blackjack();

        match (player_blackjack, dealer_blackjack) {
            (true, false) => {
                let payout = self.blackjack_payout(wager);
                self.finish_round(RoundOutcome::PlayerBlackjack, payout);
            }
            (false, true) => self.finish_round(RoundOutcome::DealerBlackjack, 0),
            (true, true) => self.finish_round(RoundOutcome::BothBlackjack, wager),
            (false, false) => self.phase = Phase::PlayerTurn,
        }

        Ok(self.snapshot())
    }
}
