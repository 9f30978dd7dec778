use serde::{Deserialize, Serialize};

/// Account record as exchanged over the REST API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    /// Display name of the account holder
    pub name: String,
    /// Balance in the smallest currency unit, never negative
    pub balance: u64,
    /// Creation timestamp in `YYYY-MM-DD HH:MM:SS` format
    pub created_time: String,
    /// Last mutation timestamp in `YYYY-MM-DD HH:MM:SS` format
    pub modified_time: String,
}

/// Body shared by the withdraw, deposit and transfer endpoints.
///
/// `id` is the account being debited/credited (the source for a transfer),
/// `target_id` is only read by transfer. `name` is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyMovementRequest {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Signed so that non-positive amounts reach validation instead of
    /// failing deserialization
    pub amount: i64,
    #[serde(rename = "targetID", default)]
    pub target_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    /// Explicit id for the new account; assigned by the store when omitted
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    /// Opening balance, defaults to zero
    #[serde(default)]
    pub balance: i64,
}

/// Only the name can be changed through an update; balances move through
/// the money-movement endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

/// Response of the transfer endpoint, serialized as `[source, target]`
pub type TransferResponse = [Account; 2];

/// Response of the list and single-record CRUD endpoints
pub type AccountListResponse = Vec<Account>;
