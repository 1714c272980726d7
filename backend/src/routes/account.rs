//! Account lookup routes

use crate::error::{ApiError, ApiResult};
use crate::services::AccountService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use bmi_tracker_shared::types::{AccountNameQuery, AccountNameResponse};

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new().route("/name", get(account_name))
}

/// Get an account's display name
///
/// GET /api/v1/account/name?account_id=N
async fn account_name(
    State(state): State<AppState>,
    Query(query): Query<AccountNameQuery>,
) -> ApiResult<Json<AccountNameResponse>> {
    let account_id = query.account_id.ok_or(ApiError::MissingAccountId)?;
    let name = AccountService::account_name(state.db(), account_id).await?;
    Ok(Json(AccountNameResponse { name }))
}
