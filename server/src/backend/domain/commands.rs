// server/src/backend/domain/commands.rs

//! Domain-level command and result types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping
//! the public DTOs defined in the `shared` crate to these internal types.

pub mod ledger {
    use crate::backend::domain::models::{Account, AccountId};

    /// Input for withdrawing from a single account.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WithdrawCommand {
        pub account_id: AccountId,
        pub amount: i64,
    }

    /// Input for depositing into a single account.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DepositCommand {
        pub account_id: AccountId,
        pub amount: i64,
    }

    /// Input for moving money between two accounts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TransferCommand {
        pub source_id: AccountId,
        pub target_id: AccountId,
        pub amount: i64,
    }

    /// Post-transfer state of both accounts.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TransferResult {
        pub source: Account,
        pub target: Account,
    }
}

pub mod accounts {
    use crate::backend::domain::models::AccountId;

    /// Input for creating a new account.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CreateAccountCommand {
        pub account_id: Option<AccountId>,
        pub name: String,
        pub opening_balance: i64,
    }

    /// Input for renaming an account.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct UpdateAccountCommand {
        pub account_id: AccountId,
        pub name: String,
    }
}
