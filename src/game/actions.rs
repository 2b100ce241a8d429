use rand::RngCore;

use crate::error::ActionError;
use crate::result::RoundOutcome;
use crate::snapshot::Snapshot;

use super::{Game, Phase};

impl<R: RngCore> Game<R> {
    fn ensure_player_turn(&self, action: &str) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            log::warn!("{action} rejected in phase {:?}", self.phase);
            return Err(ActionError::InvalidPhase);
        }

        Ok(())
    }

    /// Runs the dealer's hand and settles. Called once the player is done.
    fn finish_player_turn(&mut self) -> Result<(), ActionError> {
        self.phase = Phase::DealerTurn;
        let drawn = self.dealer_play()?;
        log::debug!("dealer drew {} card(s)", drawn.len());
        self.settle();
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 reveals the hole card and settles the round as a loss.
    /// Reaching 21 does not end the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn hit(&mut self) -> Result<Snapshot, ActionError> {
        self.ensure_player_turn("hit")?;

        let card = self.draw_card()?;
        self.player_hand.add_card(card);
        log::debug!("player hits {card}, value {}", self.player_hand.value());

        if self.player_hand.is_bust() {
            self.finish_round(RoundOutcome::PlayerBust, 0);
        }

        Ok(self.snapshot())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then plays out their hand and the round is settled before
    /// this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<Snapshot, ActionError> {
        self.ensure_player_turn("stand")?;

        self.finish_player_turn()?;

        Ok(self.snapshot())
    }

    /// Player action: Double down (double the wager, receive exactly one card,
    /// then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the hand does
    /// not have exactly two cards, the player already doubled, or the balance
    /// does not cover a second wager.
    pub fn double_down(&mut self) -> Result<Snapshot, ActionError> {
        self.ensure_player_turn("double down")?;

        // Can only double on first two cards
        if self.player_hand.len() != 2 || self.doubled {
            return Err(ActionError::CannotDouble);
        }

        let stake = self.ledger.pending_wager();
        if self.ledger.balance() < stake {
            return Err(ActionError::InsufficientFunds);
        }

        let card = self.draw_card()?;
        self.ledger.raise_wager(stake)?;
        self.doubled = true;
        self.player_hand.add_card(card);
        log::debug!(
            "player doubles to {}, draws {card}, value {}",
            self.ledger.pending_wager(),
            self.player_hand.value()
        );

        if self.player_hand.is_bust() {
            self.finish_round(RoundOutcome::PlayerBust, 0);
        } else {
            self.finish_player_turn()?;
        }

        Ok(self.snapshot())
    }
}
