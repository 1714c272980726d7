//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Pre-compute shared resources**: the pool and credential service are
//!    created once at startup
//! 2. **Cheap cloning**: all fields use Arc or are already Clone-cheap
//! 3. **Immutable after creation**: state is read-only during request handling

use crate::auth::CredentialService;
use crate::config::AppConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared application state
///
/// Holds every resource the handlers need. `SqlitePool` is internally
/// Arc'd and `CredentialService` is Copy, so cloning is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Credential sealing/verification bound to the configured scheme
    pub credentials: CredentialService,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        let credentials = CredentialService::new(config.auth.credential_scheme);

        Self {
            db,
            config: Arc::new(config),
            credentials,
        }
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &SqlitePool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the credential service
    #[inline]
    pub fn credentials(&self) -> &CredentialService {
        &self.credentials
    }
}
