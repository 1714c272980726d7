//! Measurement submission routes

use crate::error::ApiResult;
use crate::services::MeasurementService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use bmi_tracker_shared::types::{SubmitMeasurementRequest, SubmitMeasurementResponse};
use tracing::debug;

/// Create measurement routes
pub fn measurement_routes() -> Router<AppState> {
    Router::new().route("/", post(submit_measurement))
}

/// Record a BMI measurement for an account
///
/// POST /api/v1/bmi
///
/// The BMI value arrives precomputed from the client and is stored as-is.
async fn submit_measurement(
    State(state): State<AppState>,
    Json(req): Json<SubmitMeasurementRequest>,
) -> ApiResult<Json<SubmitMeasurementResponse>> {
    let entry_id = MeasurementService::submit(state.db(), req).await?;
    debug!(entry_id, "measurement stored");

    Ok(Json(SubmitMeasurementResponse {
        status: "Data saved successfully".to_string(),
    }))
}
