//! BMI Tracker Shared Library
//!
//! This crate contains the wire types shared between the backend and any
//! client: request/response payloads and the error envelope.

pub mod types;

// Re-export commonly used items
pub use types::*;
