//! Credential handling
//!
//! Isolates credential comparison behind a capability so the storage scheme
//! (plaintext parity vs argon2 hashes) can change without touching account
//! logic.

mod password;

pub use password::{CredentialScheme, CredentialService};
