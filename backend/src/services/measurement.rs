//! Measurement service
//!
//! Validates and appends measurement entries for an account.

use crate::error::ApiError;
use crate::repositories::{CreateMeasurement, MeasurementRepository};
use bmi_tracker_shared::types::SubmitMeasurementRequest;
use sqlx::SqlitePool;

/// Measurement service for business logic
pub struct MeasurementService;

impl MeasurementService {
    /// Append a measurement entry and return its id
    ///
    /// The account id must be supplied; that check happens before any
    /// storage access. Numeric fields are stored as given — no range checks,
    /// and the BMI value is never recomputed from height and weight.
    pub async fn submit(
        pool: &SqlitePool,
        input: SubmitMeasurementRequest,
    ) -> Result<i64, ApiError> {
        let account_id = input.account_id.ok_or(ApiError::MissingAccountId)?;

        let record = MeasurementRepository::create(
            pool,
            CreateMeasurement {
                account_id,
                age: input.age,
                gender: input.gender,
                height_cm: input.height_cm,
                weight_kg: input.weight_kg,
                bmi: input.bmi,
            },
        )
        .await?;

        Ok(record.id)
    }
}
