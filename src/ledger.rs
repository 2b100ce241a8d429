//! Bankroll and wager bookkeeping.

use crate::error::LedgerError;

/// Tracks the player's balance and the wager committed to the current round.
///
/// Every change to the balance goes through [`Ledger::debit`] or
/// [`Ledger::credit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    balance: usize,
    pending_wager: usize,
}

impl Ledger {
    /// Creates a ledger with the given balance and no pending wager.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            balance,
            pending_wager: 0,
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the wager committed to the current round.
    #[must_use]
    pub const fn pending_wager(&self) -> usize {
        self.pending_wager
    }

    /// Takes `amount` out of the balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if `amount` exceeds the
    /// balance.
    pub const fn debit(&mut self, amount: usize) -> Result<(), LedgerError> {
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Adds `amount` to the balance.
    pub const fn credit(&mut self, amount: usize) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Debits `amount` and makes it the pending wager.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if `amount` exceeds the
    /// balance.
    pub fn commit_wager(&mut self, amount: usize) -> Result<(), LedgerError> {
        self.debit(amount)?;
        self.pending_wager = amount;
        Ok(())
    }

    /// Debits `amount` and adds it to the pending wager.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if `amount` exceeds the
    /// balance.
    pub fn raise_wager(&mut self, amount: usize) -> Result<(), LedgerError> {
        self.debit(amount)?;
        self.pending_wager += amount;
        Ok(())
    }

    /// Drops the pending wager without touching the balance.
    pub const fn clear_wager(&mut self) {
        self.pending_wager = 0;
    }
}
