//! # Storage Module
//!
//! Handles persistence of account records.
//!
//! The domain layer only talks to the [`AccountStorage`] trait, so the
//! in-memory backend can be swapped for another implementation without
//! touching the ledger logic.
//!
//! ## Current Implementation
//!
//! - **In-memory**: `BTreeMap` behind a read/write lock, lives as long as the
//!   server process
//!
//! ## Guarantees
//!
//! - `save_accounts` writes a batch under a single lock acquisition, so a
//!   reader never sees half of a transfer

pub mod memory;
pub mod traits;

pub use memory::InMemoryAccountRepository;
pub use traits::AccountStorage;
