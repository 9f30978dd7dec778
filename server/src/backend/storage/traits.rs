//! # Storage Traits
//!
//! This module defines the storage abstraction the domain layer works
//! against, so the in-memory store can be replaced without touching the
//! ledger logic.

use anyhow::Result;
use async_trait::async_trait;

use crate::backend::domain::models::{Account, AccountId};

/// Trait defining the interface for account storage operations
///
/// The store is the single source of truth for account records; callers
/// must not cache what they read from it.
#[async_trait]
pub trait AccountStorage: Send + Sync {
    /// Retrieve a specific account by ID
    async fn get_account(&self, account_id: AccountId) -> Result<Option<Account>>;

    /// List all accounts ordered by ID
    async fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Insert a new account or replace the stored record with the same ID
    async fn store_account(&self, account: &Account) -> Result<()>;

    /// Store several accounts atomically
    /// Readers observe either none or all of the records written
    async fn save_accounts(&self, accounts: &[Account]) -> Result<()>;

    /// Delete an account
    /// Returns the removed record, or None if the ID was unknown
    async fn delete_account(&self, account_id: AccountId) -> Result<Option<Account>>;

    /// ID to hand out for an account created without an explicit one
    async fn next_account_id(&self) -> Result<AccountId>;
}
