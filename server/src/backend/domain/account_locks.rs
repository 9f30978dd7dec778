//! Per-account mutual exclusion.
//!
//! Every operation that reads a balance and then writes it back holds the
//! lock for each account it touches until the store commit has returned.
//! Locks for several accounts are always taken in ascending id order, which
//! rules out lock-order deadlocks between opposite transfers.
//!
//! The table only holds entries for accounts that are locked or awaited.
//! Dropping the last guard for an id removes its entry, so ids that never
//! existed do not accumulate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::debug;

use super::models::AccountId;

type LockTable = HashMap<AccountId, Arc<AsyncMutex<()>>>;

#[derive(Debug, Default)]
pub struct AccountLocks {
    table: Arc<Mutex<LockTable>>,
}

/// Held locks for one or more accounts, released on drop
#[derive(Debug)]
pub struct AccountGuard {
    ids: Vec<AccountId>,
    guards: Vec<OwnedMutexGuard<()>>,
    table: Arc<Mutex<LockTable>>,
}

impl AccountGuard {
    #[cfg(test)]
    pub(crate) fn ids(&self) -> &[AccountId] {
        &self.ids
    }
}

impl Drop for AccountGuard {
    fn drop(&mut self) {
        // release the account mutexes before inspecting the table
        self.guards.clear();

        // waiters clone the Arc under the table lock, so a count of one
        // means the table is the only holder
        let mut table = lock_table(&self.table);
        for id in &self.ids {
            if table.get(id).is_some_and(|mutex| Arc::strong_count(mutex) == 1) {
                table.remove(id);
            }
        }
        debug!("Released accounts {:?}", self.ids);
    }
}

impl AccountLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, id: AccountId) -> AccountGuard {
        self.lock_many(&[id]).await
    }

    /// Lock all given accounts. Duplicate ids are locked once.
    pub async fn lock_many(&self, ids: &[AccountId]) -> AccountGuard {
        let mut ids = ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        // the guard exists before the first await so a cancelled caller
        // still prunes the entries it created
        let mut guard = AccountGuard {
            guards: Vec::with_capacity(ids.len()),
            ids,
            table: self.table.clone(),
        };
        for i in 0..guard.ids.len() {
            let mutex = self.mutex_for(guard.ids[i]);
            guard.guards.push(mutex.lock_owned().await);
        }
        debug!("Locked accounts {:?}", guard.ids);

        guard
    }

    #[cfg(test)]
    pub(crate) fn tracked(&self) -> usize {
        lock_table(&self.table).len()
    }

    fn mutex_for(&self, id: AccountId) -> Arc<AsyncMutex<()>> {
        lock_table(&self.table)
            .entry(id)
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }
}

fn lock_table(table: &Mutex<LockTable>) -> MutexGuard<'_, LockTable> {
    table.lock().unwrap_or_else(|e| e.into_inner())
}
