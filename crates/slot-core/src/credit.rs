//! CreditLedger: Sole owner of the player's balance

use slot_stage::WinOutcome;

/// Balance a fresh ledger starts with
pub const DEFAULT_INITIAL_CREDIT: i64 = 100;

/// Credits taken by one round
pub const BET_AMOUNT: i64 = 1;

/// Player credit balance
///
/// Mutated only through [`bet`](Self::bet) and [`payout`](Self::payout).
/// Arithmetic is unchecked: the balance may reach zero or go below, which is
/// how game over is signalled. Callers check [`can_bet`](Self::can_bet)
/// before betting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditLedger {
    balance: i64,
}

impl CreditLedger {
    pub fn new() -> Self {
        Self::with_balance(DEFAULT_INITIAL_CREDIT)
    }

    pub fn with_balance(balance: i64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Enough credit for one more round
    pub fn can_bet(&self) -> bool {
        self.balance >= BET_AMOUNT
    }

    /// Take the bet unconditionally, returning the new balance
    pub fn bet(&mut self) -> i64 {
        self.balance -= BET_AMOUNT;
        self.balance
    }

    /// Credit the outcome's payout, returning the amount paid
    pub fn payout(&mut self, outcome: WinOutcome) -> i64 {
        let amount = outcome.payout();
        self.balance += amount;
        amount
    }

    pub fn is_game_over(&self) -> bool {
        self.balance <= 0
    }
}

impl Default for CreditLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bet_then_bonus() {
        let mut ledger = CreditLedger::new();
        assert_eq!(ledger.balance(), 100);

        assert_eq!(ledger.bet(), 99);
        assert_eq!(ledger.payout(WinOutcome::Bonus), 100);
        assert_eq!(ledger.balance(), 199);
        assert!(!ledger.is_game_over());
    }

    #[test]
    fn test_game_over_threshold() {
        let mut ledger = CreditLedger::with_balance(2);
        ledger.bet();
        assert!(!ledger.is_game_over());
        assert!(ledger.can_bet());

        ledger.bet();
        assert!(ledger.is_game_over());
        assert!(!ledger.can_bet());
    }

    #[test]
    fn test_bet_is_unchecked() {
        let mut ledger = CreditLedger::with_balance(0);
        assert_eq!(ledger.bet(), -1);
        assert!(ledger.is_game_over());

        assert_eq!(ledger.payout(WinOutcome::Bell), 3);
        assert_eq!(ledger.balance(), 2);
    }

    #[test]
    fn test_losing_payout_is_zero() {
        let mut ledger = CreditLedger::with_balance(5);
        assert_eq!(ledger.payout(WinOutcome::None), 0);
        assert_eq!(ledger.balance(), 5);
    }
}
