//! Credential sealing and verification
//!
//! Two schemes are supported. `Plain` stores credentials verbatim and
//! compares for exact equality, matching the reference system's behavior.
//! `Argon2` stores salted hashes instead.
//!
//! # Performance Considerations
//!
//! Argon2 is intentionally CPU-intensive. The async variants offload the
//! work to the blocking thread pool so it never stalls the async runtime.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::{Deserialize, Serialize};

/// How credentials are stored and compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialScheme {
    /// Verbatim storage, exact-equality comparison
    #[default]
    Plain,
    /// Argon2id salted hashes
    Argon2,
}

/// Credential service bound to the scheme chosen at startup
#[derive(Debug, Clone, Copy)]
pub struct CredentialService {
    scheme: CredentialScheme,
}

impl CredentialService {
    pub fn new(scheme: CredentialScheme) -> Self {
        Self { scheme }
    }

    #[inline]
    pub fn scheme(&self) -> CredentialScheme {
        self.scheme
    }

    /// Prepare a credential for storage (blocking under `Argon2`)
    pub fn seal(&self, credential: &str) -> Result<String> {
        match self.scheme {
            CredentialScheme::Plain => Ok(credential.to_string()),
            CredentialScheme::Argon2 => hash(credential),
        }
    }

    /// Prepare a credential for storage without blocking the async runtime
    pub async fn seal_async(&self, credential: String) -> Result<String> {
        match self.scheme {
            CredentialScheme::Plain => Ok(credential),
            CredentialScheme::Argon2 => {
                tokio::task::spawn_blocking(move || hash(&credential))
                    .await
                    .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
            }
        }
    }

    /// Compare a supplied password against a stored credential
    pub fn verify(&self, supplied: &str, stored: &str) -> Result<bool> {
        match self.scheme {
            CredentialScheme::Plain => Ok(supplied == stored),
            CredentialScheme::Argon2 => verify_hash(supplied, stored),
        }
    }

    /// Compare a supplied password without blocking the async runtime
    pub async fn verify_async(&self, supplied: String, stored: String) -> Result<bool> {
        match self.scheme {
            CredentialScheme::Plain => Ok(supplied == stored),
            CredentialScheme::Argon2 => {
                tokio::task::spawn_blocking(move || verify_hash(&supplied, &stored))
                    .await
                    .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
            }
        }
    }
}

fn hash(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

fn verify_hash(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
    let argon2 = Argon2::default();
    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
