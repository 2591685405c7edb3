//! Account Entity
//!
//! Financial counterpart of a User, created exactly once per user at
//! signup. The balance is set at creation and never mutated here.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::domain::value_object::{account_id::AccountId, user_id::UserId};

/// Lower bound of the opening balance (inclusive)
pub const OPENING_BALANCE_MIN: f64 = 1.0;

/// Upper bound of the opening balance (exclusive)
pub const OPENING_BALANCE_MAX: f64 = 10_001.0;

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Owning user (by reference, not containment)
    pub user_id: UserId,
    /// Balance, drawn from [OPENING_BALANCE_MIN, OPENING_BALANCE_MAX) at creation
    pub balance: f64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Open a new account for a user with a randomized starting balance
    pub fn open(user_id: UserId) -> Self {
        let balance = rand::rng().random_range(OPENING_BALANCE_MIN..OPENING_BALANCE_MAX);

        Self {
            account_id: AccountId::new(),
            user_id,
            balance,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_balance_in_range() {
        let user_id = UserId::new();
        for _ in 0..100 {
            let account = Account::open(user_id);
            assert!(account.balance >= OPENING_BALANCE_MIN);
            assert!(account.balance < OPENING_BALANCE_MAX);
        }
    }

    #[test]
    fn test_accounts_get_distinct_ids() {
        let user_id = UserId::new();
        let a = Account::open(user_id);
        let b = Account::open(user_id);
        assert_ne!(a.account_id, b.account_id);
        assert_eq!(a.user_id, b.user_id);
    }
}
