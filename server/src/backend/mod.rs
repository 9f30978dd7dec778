//! # Backend Module
//!
//! Contains all non-transport logic for the account ledger plus the wiring
//! that exposes it over HTTP.
//!
//! This module serves as the orchestration layer that brings together:
//! - **Domain**: Ledger engine, account management and their rules
//! - **Storage**: Account persistence behind the `AccountStorage` trait
//! - **IO**: REST handlers that expose the domain to clients
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (LedgerService, AccountService, AccountLocks)
//!     ↓
//! Storage Layer (AccountStorage)
//! ```

pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::backend::domain::models::Account;
use crate::backend::domain::{AccountLocks, AccountService, Clock, LedgerService, SystemClock};
use crate::backend::storage::{AccountStorage, InMemoryAccountRepository};
use crate::config::ServerConfig;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub account_service: AccountService,
    pub ledger_service: LedgerService,
}

impl AppState {
    /// Build both services over one store, one lock table and one clock
    pub fn new(storage: Arc<dyn AccountStorage>, clock: Arc<dyn Clock>) -> Self {
        let locks = Arc::new(AccountLocks::new());
        Self {
            account_service: AccountService::new(storage.clone(), locks.clone(), clock.clone()),
            ledger_service: LedgerService::new(storage, locks, clock),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Setting up account store");
    let storage: Arc<dyn AccountStorage> = Arc::new(InMemoryAccountRepository::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    if config.seed_demo_accounts {
        let now = clock.now();
        for account in [
            Account::new(1, "Lan".to_string(), 135000, now),
            Account::new(2, "Hoa".to_string(), 150000, now),
        ] {
            info!("Seeding demo account {} ({})", account.id, account.name);
            storage
                .store_account(&account)
                .await
                .with_context(|| format!("Failed to seed account {}", account.id))?;
        }
    }

    info!("Setting up application state");
    Ok(AppState::new(storage, clock))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(io::health_check))
        .route("/accounts", get(io::list_accounts).post(io::create_account))
        .route(
            "/accounts/:id",
            get(io::get_account)
                .put(io::update_account)
                .delete(io::delete_account),
        )
        .route("/withdraw", put(io::withdraw))
        .route("/deposit", put(io::deposit))
        .route("/transfer", put(io::transfer));

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(config.cors_layer()),
        )
        .with_state(app_state)
}
