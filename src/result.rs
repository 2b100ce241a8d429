//! Round result types for settlement.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player was dealt a natural and the dealer was not.
    PlayerBlackjack,
    /// Dealer was dealt a natural and the player was not.
    DealerBlackjack,
    /// Both were dealt naturals (push).
    BothBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player finished closer to 21.
    PlayerWins,
    /// Dealer finished closer to 21.
    DealerWins,
    /// Equal totals.
    Push,
}

impl RoundOutcome {
    /// Returns whether the player won money.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWins
        )
    }

    /// Returns whether the wager was returned unchanged.
    #[must_use]
    pub const fn is_push(self) -> bool {
        matches!(self, Self::BothBlackjack | Self::Push)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The total wager at settlement (doubled if the player doubled down).
    pub wager: usize,
    /// The amount credited back to the balance.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
    /// Whether the player doubled down.
    pub doubled: bool,
}

impl RoundResult {
    /// Net result (positive = profit, negative = loss).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.wager as isize
    }

    /// Status line describing the result.
    #[must_use]
    pub fn message(&self) -> String {
        match self.outcome {
            RoundOutcome::PlayerBlackjack => format!(
                "Blackjack! You win +{}.",
                self.payout.saturating_sub(self.wager)
            ),
            RoundOutcome::DealerBlackjack => String::from("Dealer has Blackjack. You lose."),
            RoundOutcome::BothBlackjack => String::from("Push: both have Blackjack."),
            RoundOutcome::PlayerBust if self.doubled => {
                String::from("Bust after double! You lose.")
            }
            RoundOutcome::PlayerBust => String::from("Bust! You lose."),
            RoundOutcome::DealerBust => format!("Dealer busts - you win! +{}", self.wager),
            RoundOutcome::PlayerWins => String::from("You win!"),
            RoundOutcome::DealerWins => String::from("You lose."),
            RoundOutcome::Push => String::from("Push. Wager returned."),
        }
    }
}
