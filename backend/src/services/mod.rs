//! Business logic services
//!
//! Services encapsulate business logic and coordinate between the storage
//! gateway and the credential capability. None of them carries state across
//! calls; each operation is a single pass over the shared pool.

pub mod account;
pub mod measurement;

pub use account::{AccountService, LoginSummary};
pub use measurement::MeasurementService;
