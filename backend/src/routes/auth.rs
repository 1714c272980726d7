//! Authentication routes
//!
//! Provides endpoints for account registration and login.

use crate::error::ApiResult;
use crate::services::AccountService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use bmi_tracker_shared::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new account
///
/// POST /api/v1/auth/register
///
/// The issued account id is the client's handle for every later request;
/// the server keeps no session for it.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let account_id = AccountService::register(state.db(), state.credentials(), &req).await?;
    Ok((StatusCode::CREATED, Json(RegisterResponse { account_id })))
}

/// Login with name and password
///
/// POST /api/v1/auth/login
///
/// Succeeds only for accounts with at least one recorded measurement and
/// returns the latest one alongside the account id.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let summary =
        AccountService::login(state.db(), state.credentials(), &req.name, &req.password).await?;

    Ok(Json(LoginResponse {
        success: true,
        account_id: summary.account_id,
        bmi: summary.bmi,
        gender: summary.gender,
    }))
}
