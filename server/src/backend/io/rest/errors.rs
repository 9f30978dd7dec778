//! Translation of domain errors into HTTP responses.
//!
//! Error bodies are the plain-text error message. Client mistakes are
//! logged at warn level, storage failures at error level.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::backend::domain::{AccountError, LedgerError};

impl LedgerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LedgerError::NotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::InvalidAmount(_) | LedgerError::SameAccount(_) => StatusCode::BAD_REQUEST,
            LedgerError::InsufficientFunds { .. } | LedgerError::BalanceOverflow(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            LedgerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AccountError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::NotFound(_) => StatusCode::NOT_FOUND,
            AccountError::AccountExists(_) => StatusCode::CONFLICT,
            AccountError::InvalidId(_)
            | AccountError::InvalidName(_)
            | AccountError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            AccountError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        error_response(self.status_code(), self.to_string())
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        error_response(self.status_code(), self.to_string())
    }
}

/// 400 response for a body that is not valid JSON for the endpoint
pub fn rejected_body(rejection: JsonRejection) -> Response {
    warn!("Rejected request body: {}", rejection.body_text());
    (StatusCode::BAD_REQUEST, rejection.body_text()).into_response()
}

fn error_response(status: StatusCode, message: String) -> Response {
    if status.is_server_error() {
        error!("{}", message);
    } else {
        warn!("{} - {}", status, message);
    }
    (status, message).into_response()
}
