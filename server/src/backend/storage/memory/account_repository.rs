use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::backend::domain::models::{Account, AccountId};
use crate::backend::storage::traits::AccountStorage;

/// Repository keeping accounts in a `BTreeMap` behind a read/write lock
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<BTreeMap<AccountId, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given accounts
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.id, account))
            .collect();
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<AccountId, Account>>> {
        self.accounts
            .read()
            .map_err(|_| anyhow!("Account store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<AccountId, Account>>> {
        self.accounts
            .write()
            .map_err(|_| anyhow!("Account store lock poisoned"))
    }
}

#[async_trait]
impl AccountStorage for InMemoryAccountRepository {
    async fn get_account(&self, account_id: AccountId) -> Result<Option<Account>> {
        Ok(self.read()?.get(&account_id).cloned())
    }

    async fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn store_account(&self, account: &Account) -> Result<()> {
        debug!("Storing account {}", account.id);
        self.write()?.insert(account.id, account.clone());
        Ok(())
    }

    async fn save_accounts(&self, accounts: &[Account]) -> Result<()> {
        // single write guard for the whole batch
        let mut store = self.write()?;
        for account in accounts {
            store.insert(account.id, account.clone());
        }
        debug!("Saved {} accounts atomically", accounts.len());
        Ok(())
    }

    async fn delete_account(&self, account_id: AccountId) -> Result<Option<Account>> {
        Ok(self.write()?.remove(&account_id))
    }

    async fn next_account_id(&self) -> Result<AccountId> {
        let store = self.read()?;
        let last = store.keys().next_back().copied().unwrap_or(0);
        last.checked_add(1)
            .ok_or_else(|| anyhow!("Account id space exhausted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn account(id: AccountId, balance: u64) -> Account {
        let now = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        Account::new(id, format!("account-{}", id), balance, now)
    }

    #[tokio::test]
    async fn test_store_and_get_account() {
        let repo = InMemoryAccountRepository::new();
        repo.store_account(&account(7, 100)).await.unwrap();

        let stored = repo.get_account(7).await.unwrap().unwrap();
        assert_eq!(stored.balance, 100);
        assert!(repo.get_account(8).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryAccountRepository::with_accounts(vec![
            account(3, 1),
            account(1, 1),
            account(2, 1),
        ]);

        let ids: Vec<AccountId> = repo
            .list_accounts()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_save_accounts_replaces_all_records() {
        let repo = InMemoryAccountRepository::with_accounts(vec![account(1, 10), account(2, 20)]);

        repo.save_accounts(&[account(1, 5), account(2, 25)])
            .await
            .unwrap();

        assert_eq!(repo.get_account(1).await.unwrap().unwrap().balance, 5);
        assert_eq!(repo.get_account(2).await.unwrap().unwrap().balance, 25);
    }

    #[tokio::test]
    async fn test_delete_account_returns_removed_record() {
        let repo = InMemoryAccountRepository::with_accounts(vec![account(1, 10)]);

        let removed = repo.delete_account(1).await.unwrap();
        assert_eq!(removed.map(|a| a.id), Some(1));
        assert!(repo.delete_account(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_next_account_id() {
        let repo = InMemoryAccountRepository::new();
        assert_eq!(repo.next_account_id().await.unwrap(), 1);

        repo.store_account(&account(41, 0)).await.unwrap();
        assert_eq!(repo.next_account_id().await.unwrap(), 42);
    }
}
