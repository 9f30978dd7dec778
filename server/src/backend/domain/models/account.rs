use chrono::{DateTime, Utc};

pub type AccountId = i64;

/// Domain representation of an account.
///
/// `balance` is unsigned so a negative balance cannot be represented; every
/// balance change goes through [`Account::debit`] or [`Account::credit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub balance: u64,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

/// Reasons a balance change cannot be applied to a single account
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BalanceError {
    #[error("Insufficient funds: balance {balance} is less than {requested}")]
    InsufficientFunds { balance: u64, requested: u64 },
    #[error("Balance would overflow")]
    Overflow,
}

impl Account {
    pub fn new(id: AccountId, name: String, balance: u64, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            balance,
            created_time: now,
            modified_time: now,
        }
    }

    /// Returns a copy of this account with `amount` removed from the balance.
    /// The receiver is left untouched so a failed operation never leaks a
    /// half-applied state.
    pub fn debit(&self, amount: u64, now: DateTime<Utc>) -> Result<Self, BalanceError> {
        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or(BalanceError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            })?;

        Ok(Self {
            balance,
            modified_time: now,
            ..self.clone()
        })
    }

    /// Returns a copy of this account with `amount` added to the balance
    pub fn credit(&self, amount: u64, now: DateTime<Utc>) -> Result<Self, BalanceError> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(BalanceError::Overflow)?;

        Ok(Self {
            balance,
            modified_time: now,
            ..self.clone()
        })
    }

    pub fn rename(&self, name: String, now: DateTime<Utc>) -> Self {
        Self {
            name,
            modified_time: now,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap()
    }

    #[test]
    fn test_debit_reduces_balance_and_touches_modified_time() {
        let account = Account::new(1, "Lan".to_string(), 135000, created());
        let later = created() + Duration::minutes(6);

        let debited = account.debit(5000, later).unwrap();

        assert_eq!(debited.balance, 130000);
        assert_eq!(debited.modified_time, later);
        assert_eq!(debited.created_time, created());
        // original is unchanged
        assert_eq!(account.balance, 135000);
        assert_eq!(account.modified_time, created());
    }

    #[test]
    fn test_debit_to_exactly_zero() {
        let account = Account::new(1, "Lan".to_string(), 100, created());
        assert_eq!(account.debit(100, created()).unwrap().balance, 0);
    }

    #[test]
    fn test_debit_insufficient_funds() {
        let account = Account::new(1, "Lan".to_string(), 100, created());

        let err = account.debit(101, created()).unwrap_err();

        assert_eq!(
            err,
            BalanceError::InsufficientFunds {
                balance: 100,
                requested: 101
            }
        );
    }

    #[test]
    fn test_credit_overflow() {
        let account = Account::new(1, "Lan".to_string(), u64::MAX, created());
        assert_eq!(account.credit(1, created()).unwrap_err(), BalanceError::Overflow);
    }

    #[test]
    fn test_rename_keeps_balance() {
        let account = Account::new(1, "Lan".to_string(), 100, created());
        let later = created() + Duration::seconds(1);

        let renamed = account.rename("Lan Nguyen".to_string(), later);

        assert_eq!(renamed.name, "Lan Nguyen");
        assert_eq!(renamed.balance, 100);
        assert_eq!(renamed.modified_time, later);
    }
}
