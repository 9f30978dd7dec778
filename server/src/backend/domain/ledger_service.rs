//! Ledger engine: withdraw, deposit and transfer.
//!
//! Each operation validates its amount, locks the affected account(s),
//! reads the current records from storage, computes the new records and
//! commits them before the locks are released. A failed operation writes
//! nothing.

use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::domain::account_locks::AccountLocks;
use crate::backend::domain::clock::Clock;
use crate::backend::domain::commands::ledger::{
    DepositCommand, TransferCommand, TransferResult, WithdrawCommand,
};
use crate::backend::domain::models::{Account, AccountId, BalanceError};
use crate::backend::storage::AccountStorage;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    NotFound(AccountId),
    #[error("Invalid amount {0}: amount must be a positive integer")]
    InvalidAmount(i64),
    #[error("Insufficient funds in account {account_id}: balance is {balance}, requested {requested}")]
    InsufficientFunds {
        account_id: AccountId,
        balance: u64,
        requested: u64,
    },
    #[error("Cannot transfer from account {0} to itself")]
    SameAccount(AccountId),
    #[error("Balance of account {0} would overflow")]
    BalanceOverflow(AccountId),
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Service applying balance changes to stored accounts
#[derive(Clone)]
pub struct LedgerService {
    storage: Arc<dyn AccountStorage>,
    locks: Arc<AccountLocks>,
    clock: Arc<dyn Clock>,
}

impl LedgerService {
    pub fn new(
        storage: Arc<dyn AccountStorage>,
        locks: Arc<AccountLocks>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            storage,
            locks,
            clock,
        }
    }

    /// Remove `amount` from an account
    pub async fn withdraw(&self, command: WithdrawCommand) -> Result<Account, LedgerError> {
        info!(
            "Withdrawing {} from account {}",
            command.amount, command.account_id
        );
        let amount = validate_amount(command.amount)?;

        let _guard = self.locks.lock(command.account_id).await;
        let account = self.load(command.account_id).await?;
        let updated = account
            .debit(amount, self.clock.now())
            .map_err(|e| balance_error(&account, e))?;
        self.storage.store_account(&updated).await?;

        info!(
            "Withdrew {} from account {}, new balance {}",
            amount, updated.id, updated.balance
        );
        Ok(updated)
    }

    /// Add `amount` to an account
    pub async fn deposit(&self, command: DepositCommand) -> Result<Account, LedgerError> {
        info!(
            "Depositing {} into account {}",
            command.amount, command.account_id
        );
        let amount = validate_amount(command.amount)?;

        let _guard = self.locks.lock(command.account_id).await;
        let account = self.load(command.account_id).await?;
        let updated = account
            .credit(amount, self.clock.now())
            .map_err(|e| balance_error(&account, e))?;
        self.storage.store_account(&updated).await?;

        info!(
            "Deposited {} into account {}, new balance {}",
            amount, updated.id, updated.balance
        );
        Ok(updated)
    }

    /// Move `amount` from source to target.
    ///
    /// Both accounts stay locked from the balance check until the combined
    /// commit, and the two records are written with one atomic store call.
    pub async fn transfer(&self, command: TransferCommand) -> Result<TransferResult, LedgerError> {
        info!(
            "Transferring {} from account {} to account {}",
            command.amount, command.source_id, command.target_id
        );
        let amount = validate_amount(command.amount)?;
        if command.source_id == command.target_id {
            warn!("Rejected self-transfer on account {}", command.source_id);
            return Err(LedgerError::SameAccount(command.source_id));
        }

        let _guard = self
            .locks
            .lock_many(&[command.source_id, command.target_id])
            .await;
        let source = self.load(command.source_id).await?;
        let target = self.load(command.target_id).await?;

        let now = self.clock.now();
        let source = source
            .debit(amount, now)
            .map_err(|e| balance_error(&source, e))?;
        let target = target
            .credit(amount, now)
            .map_err(|e| balance_error(&target, e))?;

        self.storage
            .save_accounts(&[source.clone(), target.clone()])
            .await?;

        info!(
            "Transferred {} from account {} (balance {}) to account {} (balance {})",
            amount, source.id, source.balance, target.id, target.balance
        );
        Ok(TransferResult { source, target })
    }

    async fn load(&self, account_id: AccountId) -> Result<Account, LedgerError> {
        self.storage.get_account(account_id).await?.ok_or_else(|| {
            warn!("Account not found: {}", account_id);
            LedgerError::NotFound(account_id)
        })
    }
}

fn validate_amount(amount: i64) -> Result<u64, LedgerError> {
    match u64::try_from(amount) {
        Ok(amount) if amount > 0 => Ok(amount),
        _ => Err(LedgerError::InvalidAmount(amount)),
    }
}

fn balance_error(account: &Account, error: BalanceError) -> LedgerError {
    match error {
        BalanceError::InsufficientFunds { balance, requested } => {
            warn!(
                "Insufficient funds in account {}: balance {}, requested {}",
                account.id, balance, requested
            );
            LedgerError::InsufficientFunds {
                account_id: account.id,
                balance,
                requested,
            }
        }
        BalanceError::Overflow => LedgerError::BalanceOverflow(account.id),
    }
}
