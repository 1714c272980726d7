//! Measurement repository for database operations

use super::{AccountRepository, StorageError};
use sqlx::SqlitePool;

/// Measurement record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MeasurementRecord {
    pub id: i64,
    pub account_id: i64,
    pub age: i64,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
}

/// Input for creating a measurement entry
#[derive(Debug, Clone)]
pub struct CreateMeasurement {
    pub account_id: i64,
    pub age: i64,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
}

/// Measurement repository for database operations
pub struct MeasurementRepository;

impl MeasurementRepository {
    /// Append a measurement entry and return the stored row
    ///
    /// Rejects entries whose account id does not resolve. The existence
    /// probe and the insert are separate statements; a foreign key violation
    /// surfacing from the store maps to the same rejection.
    pub async fn create(
        pool: &SqlitePool,
        input: CreateMeasurement,
    ) -> Result<MeasurementRecord, StorageError> {
        if !AccountRepository::exists(pool, input.account_id).await? {
            return Err(StorageError::UnknownAccount(input.account_id));
        }

        let record = sqlx::query_as::<_, MeasurementRecord>(
            r#"
            INSERT INTO measurements (account_id, age, gender, height_cm, weight_kg, bmi)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, account_id, age, gender, height_cm, weight_kg, bmi
            "#,
        )
        .bind(input.account_id)
        .bind(input.age)
        .bind(&input.gender)
        .bind(input.height_cm)
        .bind(input.weight_kg)
        .bind(input.bmi)
        .fetch_one(pool)
        .await
        .map_err(|e| classify_insert_error(input.account_id, e))?;

        Ok(record)
    }

    /// Most recent entry for an account: the one with the highest id
    ///
    /// Insertion order is the ordering key; the schema carries no timestamp.
    pub async fn latest_for_account(
        pool: &SqlitePool,
        account_id: i64,
    ) -> Result<Option<MeasurementRecord>, StorageError> {
        let record = sqlx::query_as::<_, MeasurementRecord>(
            r#"
            SELECT id, account_id, age, gender, height_cm, weight_kg, bmi
            FROM measurements
            WHERE account_id = ?
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(account_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}

fn classify_insert_error(account_id: i64, err: sqlx::Error) -> StorageError {
    match &err {
        sqlx::Error::Database(db)
            if matches!(db.kind(), sqlx::error::ErrorKind::ForeignKeyViolation) =>
        {
            StorageError::UnknownAccount(account_id)
        }
        _ => StorageError::Database(err),
    }
}
