use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::domain::account_locks::AccountLocks;
use crate::backend::domain::clock::Clock;
use crate::backend::domain::commands::accounts::{CreateAccountCommand, UpdateAccountCommand};
use crate::backend::domain::models::{Account, AccountId};
use crate::backend::storage::AccountStorage;

const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Account not found: {0}")]
    NotFound(AccountId),
    #[error("Account already exists: {0}")]
    AccountExists(AccountId),
    #[error("Invalid account id {0}: ids must be positive")]
    InvalidId(AccountId),
    #[error("Invalid account name: {0}")]
    InvalidName(String),
    #[error("Invalid opening balance {0}: balance cannot be negative")]
    InvalidAmount(i64),
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Service for creating, reading, renaming and deleting accounts
#[derive(Clone)]
pub struct AccountService {
    storage: Arc<dyn AccountStorage>,
    locks: Arc<AccountLocks>,
    clock: Arc<dyn Clock>,
}

impl AccountService {
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

    /// List all accounts
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AccountError> {
        info!("Listing all accounts");

        let accounts = self.storage.list_accounts().await?;

        info!("Found {} accounts", accounts.len());
        Ok(accounts)
    }

    /// Get an account by ID
    pub async fn get_account(&self, account_id: AccountId) -> Result<Account, AccountError> {
        info!("Getting account: {}", account_id);

        self.storage.get_account(account_id).await?.ok_or_else(|| {
            warn!("Account not found: {}", account_id);
            AccountError::NotFound(account_id)
        })
    }

    /// Create a new account
    pub async fn create_account(&self, command: CreateAccountCommand) -> Result<Account, AccountError> {
        info!(
            "Creating account: id={:?}, name={}, opening_balance={}",
            command.account_id, command.name, command.opening_balance
        );

        let name = validate_name(&command.name)?;
        let balance = u64::try_from(command.opening_balance)
            .map_err(|_| AccountError::InvalidAmount(command.opening_balance))?;

        let account = match command.account_id {
            Some(account_id) => {
                if account_id <= 0 {
                    return Err(AccountError::InvalidId(account_id));
                }
                let _guard = self.locks.lock(account_id).await;
                if self.storage.get_account(account_id).await?.is_some() {
                    warn!("Account already exists: {}", account_id);
                    return Err(AccountError::AccountExists(account_id));
                }
                let account = Account::new(account_id, name, balance, self.clock.now());
                self.storage.store_account(&account).await?;
                account
            }
            None => {
                // concurrent creators can draw the same id, retry if taken
                loop {
                    let account_id = self.storage.next_account_id().await?;
                    let _guard = self.locks.lock(account_id).await;
                    if self.storage.get_account(account_id).await?.is_some() {
                        continue;
                    }
                    let account = Account::new(account_id, name.clone(), balance, self.clock.now());
                    self.storage.store_account(&account).await?;
                    break account;
                }
            }
        };

        info!("Created account: {} with ID: {}", account.name, account.id);
        Ok(account)
    }

    /// Rename an existing account
    pub async fn update_account(&self, command: UpdateAccountCommand) -> Result<Account, AccountError> {
        info!("Updating account: {}", command.account_id);

        let name = validate_name(&command.name)?;

        let _guard = self.locks.lock(command.account_id).await;
        let account = self.get_account(command.account_id).await?;
        let account = account.rename(name, self.clock.now());
        self.storage.store_account(&account).await?;

        info!("Updated account: {} with ID: {}", account.name, account.id);
        Ok(account)
    }

    /// Delete an account, returning the removed record
    pub async fn delete_account(&self, account_id: AccountId) -> Result<Account, AccountError> {
        info!("Deleting account: {}", account_id);

        let _guard = self.locks.lock(account_id).await;
        let account = self.storage.delete_account(account_id).await?.ok_or_else(|| {
            warn!("Account not found: {}", account_id);
            AccountError::NotFound(account_id)
        })?;

        info!("Deleted account: {} with ID: {}", account.name, account.id);
        Ok(account)
    }
}

fn validate_name(name: &str) -> Result<String, AccountError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AccountError::InvalidName(
            "Account name cannot be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AccountError::InvalidName(format!(
            "Account name cannot exceed {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(name.to_string())
}
