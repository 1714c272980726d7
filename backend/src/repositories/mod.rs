//! Storage gateway
//!
//! Data access layer over the relational store. Referential integrity is an
//! explicit contract of this layer: orphan measurement inserts are rejected
//! here, not just by the schema.

pub mod account;
pub mod measurement;

pub use account::{AccountRecord, AccountRepository};
pub use measurement::{CreateMeasurement, MeasurementRecord, MeasurementRepository};

use thiserror::Error;

/// Storage gateway failure classification
#[derive(Debug, Error)]
pub enum StorageError {
    /// The referenced account does not exist
    #[error("account {0} does not exist")]
    UnknownAccount(i64),

    /// The underlying store failed or is unreachable
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
