//! # Domain Module
//!
//! Contains all business logic for the account ledger.
//!
//! This module encapsulates the rules that govern account balances and the
//! services that apply them. It operates independently of the HTTP layer and
//! of any specific storage mechanism.
//!
//! ## Module Organization
//!
//! - **ledger_service**: withdraw, deposit and transfer with balance invariants
//! - **account_service**: account CRUD (list, get, create, rename, delete)
//! - **account_locks**: per-account mutual exclusion shared by both services
//! - **clock**: injectable time source for account timestamps
//! - **commands**: internal command and result types
//! - **models**: the domain `Account`
//!
//! ## Business Rules
//!
//! - A balance is never negative
//! - Money-movement amounts are strictly positive integers
//! - A transfer debits and credits in one atomic commit, or not at all
//! - A transfer needs two distinct, existing accounts
//! - `created_time` is fixed at creation, `modified_time` follows every mutation

pub mod account_locks;
pub mod account_service;
pub mod clock;
pub mod commands;
pub mod ledger_service;
pub mod models;

pub use account_locks::*;
pub use account_service::*;
pub use clock::*;
pub use commands::*;
pub use ledger_service::*;
