//! # REST API for Account Management
//!
//! Endpoints for listing, retrieving, creating, renaming and deleting
//! accounts. Every endpoint responds with an array of account objects, a
//! single-record endpoint with a one-element array.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::errors::rejected_body;
use super::mappers::AccountMapper;
use crate::backend::AppState;
use shared::{CreateAccountRequest, UpdateAccountRequest};

/// List all accounts
pub async fn list_accounts(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/accounts");

    match state.account_service.list_accounts().await {
        Ok(accounts) => (StatusCode::OK, Json(AccountMapper::to_dto_list(accounts))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get an account by ID
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/accounts/{}", account_id);

    match state.account_service.get_account(account_id).await {
        Ok(account) => (StatusCode::OK, Json(vec![AccountMapper::to_dto(account)])).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new account
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected_body(rejection),
    };
    info!("POST /api/accounts - request: {:?}", request);

    let command = AccountMapper::to_create_command(request);
    match state.account_service.create_account(command).await {
        Ok(account) => (StatusCode::OK, Json(vec![AccountMapper::to_dto(account)])).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Rename an account
pub async fn update_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
    payload: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected_body(rejection),
    };
    info!("PUT /api/accounts/{} - request: {:?}", account_id, request);

    let command = AccountMapper::to_update_command(account_id, request);
    match state.account_service.update_account(command).await {
        Ok(account) => (StatusCode::OK, Json(vec![AccountMapper::to_dto(account)])).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete an account, responding with the removed record
pub async fn delete_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/accounts/{}", account_id);

    match state.account_service.delete_account(account_id).await {
        Ok(account) => (StatusCode::OK, Json(vec![AccountMapper::to_dto(account)])).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::{create_router, AppState};
    use crate::backend::domain::clock::FixedClock;
    use crate::backend::domain::models::Account as DomainAccount;
    use crate::backend::storage::InMemoryAccountRepository;
    use crate::config::ServerConfig;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        Router,
    };
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use shared::Account;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        let noon = Utc.with_ymd_and_hms(2021, 8, 4, 12, 0, 0).unwrap();
        let storage = InMemoryAccountRepository::with_accounts(vec![
            DomainAccount::new(1, "test".to_string(), 600000, noon),
            DomainAccount::new(2, "test2".to_string(), 700000, noon),
            DomainAccount::new(3, "test3".to_string(), 800000, noon),
        ]);
        let app_state = AppState::new(Arc::new(storage), Arc::new(FixedClock::new(noon)));
        create_router(app_state, &ServerConfig::default())
    }

    fn request(method: Method, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_list_accounts() {
        let app = setup_test_app();

        let (status, body) = send(&app, request(Method::GET, "/api/accounts", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"[{"id":1,"name":"test","balance":600000,"created_time":"2021-08-04 12:00:00","modified_time":"2021-08-04 12:00:00"},{"id":2,"name":"test2","balance":700000,"created_time":"2021-08-04 12:00:00","modified_time":"2021-08-04 12:00:00"},{"id":3,"name":"test3","balance":800000,"created_time":"2021-08-04 12:00:00","modified_time":"2021-08-04 12:00:00"}]"#
        );
    }

    #[tokio::test]
    async fn test_get_account_by_id() {
        let app = setup_test_app();

        let (status, body) = send(&app, request(Method::GET, "/api/accounts/1", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"[{"id":1,"name":"test","balance":600000,"created_time":"2021-08-04 12:00:00","modified_time":"2021-08-04 12:00:00"}]"#
        );
    }

    #[tokio::test]
    async fn test_get_account_not_found() {
        let app = setup_test_app();

        let (status, _) = send(&app, request(Method::GET, "/api/accounts/55555", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, request(Method::GET, "/api/accounts/abc", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_account() {
        let app = setup_test_app();

        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/api/accounts",
                Some(json!({"name": "test4", "balance": 900000})),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let created: Vec<Account> = serde_json::from_str(&body).unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].id, 4);
        assert_eq!(created[0].balance, 900000);

        let (status, _) = send(
            &app,
            request(
                Method::POST,
                "/api/accounts",
                Some(json!({"id": 1, "name": "dupe", "balance": 0})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(
            &app,
            request(
                Method::POST,
                "/api/accounts",
                Some(json!({"name": "broke", "balance": -1})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_account_changes_name_only() {
        let app = setup_test_app();

        let (status, body) = send(
            &app,
            request(
                Method::PUT,
                "/api/accounts/1",
                Some(json!({"id": 1, "name": "test_change", "balance": 1})),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let updated: Vec<Account> = serde_json::from_str(&body).unwrap();
        assert_eq!(updated[0].name, "test_change");
        assert_eq!(updated[0].balance, 600000);

        let (status, _) = send(
            &app,
            request(Method::PUT, "/api/accounts/9", Some(json!({"name": "ghost"}))),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_account() {
        let app = setup_test_app();

        let (status, body) = send(&app, request(Method::DELETE, "/api/accounts/1", None)).await;

        assert_eq!(status, StatusCode::OK);
        let deleted: Vec<Account> = serde_json::from_str(&body).unwrap();
        assert_eq!(deleted[0].id, 1);
        assert_eq!(deleted[0].name, "test");

        let (status, _) = send(&app, request(Method::GET, "/api/accounts/1", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, request(Method::DELETE, "/api/accounts/1", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
