//! API request and response types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request
///
/// Name and password must both be present; no other shape requirements.
/// Names are not unique across accounts.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Registration response carrying the issued account id
///
/// The id is the client's handle for all later requests; the server keeps
/// no session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub account_id: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Login response: the account id plus the most recent measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub account_id: i64,
    pub bmi: f64,
    pub gender: String,
}

/// Measurement submission request
///
/// `account_id` stays optional at the wire level so its absence maps to a
/// client error rather than a deserialization failure. The numeric fields
/// are stored as given; the BMI value is computed by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitMeasurementRequest {
    pub account_id: Option<i64>,
    pub age: i64,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
}

/// Measurement submission response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitMeasurementResponse {
    pub status: String,
}

/// Query parameters for the account-name lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountNameQuery {
    pub account_id: Option<i64>,
}

/// Account-name lookup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountNameResponse {
    pub name: String,
}

/// API error response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
