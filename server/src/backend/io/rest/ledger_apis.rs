//! # REST API for Money Movement
//!
//! Endpoints for withdrawing, depositing and transferring money.
//! All three accept the same `{id, name, amount, targetID}` body.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::errors::rejected_body;
use super::mappers::AccountMapper;
use crate::backend::AppState;
use shared::MoneyMovementRequest;

/// Withdraw money from an account
pub async fn withdraw(
    State(state): State<AppState>,
    payload: Result<Json<MoneyMovementRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected_body(rejection),
    };
    info!("PUT /api/withdraw - request: {:?}", request);

    let command = AccountMapper::to_withdraw_command(&request);
    match state.ledger_service.withdraw(command).await {
        Ok(account) => (StatusCode::OK, Json(AccountMapper::to_dto(account))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Deposit money into an account
pub async fn deposit(
    State(state): State<AppState>,
    payload: Result<Json<MoneyMovementRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected_body(rejection),
    };
    info!("PUT /api/deposit - request: {:?}", request);

    let command = AccountMapper::to_deposit_command(&request);
    match state.ledger_service.deposit(command).await {
        Ok(account) => (StatusCode::OK, Json(AccountMapper::to_dto(account))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Transfer money from `id` to `targetID`; responds with `[source, target]`
pub async fn transfer(
    State(state): State<AppState>,
    payload: Result<Json<MoneyMovementRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected_body(rejection),
    };
    info!("PUT /api/transfer - request: {:?}", request);

    let command = AccountMapper::to_transfer_command(&request);
    match state.ledger_service.transfer(command).await {
        Ok(result) => (StatusCode::OK, Json(AccountMapper::to_transfer_dto(result))).into_response(),
        Err(e) => e.into_response(),
    }
}
