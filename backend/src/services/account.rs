//! Account service for registration, login, and account lookups
//!
//! # Performance
//!
//! Credential hashing/verification under the argon2 scheme runs on the
//! blocking thread pool via the credential service's async variants.

use crate::auth::{CredentialScheme, CredentialService};
use crate::error::ApiError;
use crate::repositories::{AccountRepository, MeasurementRepository};
use bmi_tracker_shared::types::RegisterRequest;
use sqlx::SqlitePool;
use validator::Validate;

/// Login result: the account id plus the most recent measurement
#[derive(Debug, Clone)]
pub struct LoginSummary {
    pub account_id: i64,
    pub bmi: f64,
    pub gender: String,
}

/// Account service for registration and authentication
pub struct AccountService;

impl AccountService {
    /// Register a new account and return its id
    ///
    /// Name and password must be present; nothing else about their shape is
    /// checked, and duplicate names are allowed. The returned id is the
    /// caller's handle for all later requests.
    pub async fn register(
        pool: &SqlitePool,
        credentials: &CredentialService,
        input: &RegisterRequest,
    ) -> Result<i64, ApiError> {
        input
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let sealed = credentials
            .seal_async(input.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let account_id = AccountRepository::create(pool, &input.name, &sealed).await?;

        Ok(account_id)
    }

    /// Authenticate and return the most recent measurement
    ///
    /// The failure signal is uniform: a bad name and a bad password are
    /// indistinguishable to the caller. An account with no measurement
    /// history cannot complete login, matching the reference system.
    pub async fn login(
        pool: &SqlitePool,
        credentials: &CredentialService,
        name: &str,
        password: &str,
    ) -> Result<LoginSummary, ApiError> {
        let account = match credentials.scheme() {
            CredentialScheme::Plain => {
                AccountRepository::find_by_credentials(pool, name, password).await?
            }
            CredentialScheme::Argon2 => {
                // Names are not unique; any account carrying the name is a
                // login candidate.
                let mut matched = None;
                for candidate in AccountRepository::find_all_by_name(pool, name).await? {
                    let verified = credentials
                        .verify_async(password.to_string(), candidate.credential.clone())
                        .await
                        .map_err(ApiError::Internal)?;
                    if verified {
                        matched = Some(candidate);
                        break;
                    }
                }
                matched
            }
        };

        let account = account.ok_or(ApiError::InvalidCredentials)?;

        let entry = MeasurementRepository::latest_for_account(pool, account.id)
            .await?
            .ok_or(ApiError::NoMeasurementHistory)?;

        Ok(LoginSummary {
            account_id: account.id,
            bmi: entry.bmi,
            gender: entry.gender,
        })
    }

    /// Look up an account's name by id
    pub async fn account_name(pool: &SqlitePool, account_id: i64) -> Result<String, ApiError> {
        AccountRepository::find_name(pool, account_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Account not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::repositories::CreateMeasurement;

    fn request(name: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            password: password.to_string(),
        }
    }

    async fn record_measurement(pool: &SqlitePool, account_id: i64, bmi: f64, gender: &str) {
        MeasurementRepository::create(
            pool,
            CreateMeasurement {
                account_id,
                age: 30,
                gender: gender.to_string(),
                height_cm: 165.0,
                weight_kg: 60.0,
                bmi,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn register_rejects_missing_fields() {
        let pool = test_pool().await;
        let credentials = CredentialService::new(CredentialScheme::Plain);

        let err = AccountService::register(&pool, &credentials, &request("", "pw1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = AccountService::register(&pool, &credentials, &request("alice", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn login_requires_measurement_history() {
        let pool = test_pool().await;
        let credentials = CredentialService::new(CredentialScheme::Plain);

        let account_id = AccountService::register(&pool, &credentials, &request("alice", "pw1"))
            .await
            .unwrap();
        assert!(account_id > 0);

        let err = AccountService::login(&pool, &credentials, "alice", "pw1")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NoMeasurementHistory));

        record_measurement(&pool, account_id, 22.0, "F").await;

        let summary = AccountService::login(&pool, &credentials, "alice", "pw1")
            .await
            .unwrap();
        assert_eq!(summary.account_id, account_id);
        assert_eq!(summary.bmi, 22.0);
        assert_eq!(summary.gender, "F");
    }

    #[tokio::test]
    async fn login_failure_is_uniform() {
        let pool = test_pool().await;
        let credentials = CredentialService::new(CredentialScheme::Plain);

        let account_id = AccountService::register(&pool, &credentials, &request("alice", "pw1"))
            .await
            .unwrap();
        record_measurement(&pool, account_id, 22.0, "F").await;

        let wrong_password = AccountService::login(&pool, &credentials, "alice", "wrong")
            .await
            .unwrap_err();
        let wrong_name = AccountService::login(&pool, &credentials, "nobody", "pw1")
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, ApiError::InvalidCredentials));
        assert!(matches!(wrong_name, ApiError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), wrong_name.to_string());
    }

    #[tokio::test]
    async fn argon2_mode_round_trips_and_hides_the_password() {
        let pool = test_pool().await;
        let credentials = CredentialService::new(CredentialScheme::Argon2);

        let account_id = AccountService::register(&pool, &credentials, &request("alice", "pw1"))
            .await
            .unwrap();
        record_measurement(&pool, account_id, 24.5, "M").await;

        let stored: String =
            sqlx::query_scalar("SELECT credential FROM accounts WHERE id = ?")
                .bind(account_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_ne!(stored, "pw1");

        let summary = AccountService::login(&pool, &credentials, "alice", "pw1")
            .await
            .unwrap();
        assert_eq!(summary.account_id, account_id);
        assert_eq!(summary.bmi, 24.5);

        let err = AccountService::login(&pool, &credentials, "alice", "pw2")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn argon2_mode_considers_every_same_named_account() {
        let pool = test_pool().await;
        let credentials = CredentialService::new(CredentialScheme::Argon2);

        let first = AccountService::register(&pool, &credentials, &request("alice", "pw1"))
            .await
            .unwrap();
        let second = AccountService::register(&pool, &credentials, &request("alice", "pw2"))
            .await
            .unwrap();
        record_measurement(&pool, first, 20.0, "F").await;
        record_measurement(&pool, second, 26.0, "F").await;

        let summary = AccountService::login(&pool, &credentials, "alice", "pw2")
            .await
            .unwrap();
        assert_eq!(summary.account_id, second);
        assert_eq!(summary.bmi, 26.0);
    }

    #[tokio::test]
    async fn account_name_lookup_is_idempotent() {
        let pool = test_pool().await;
        let credentials = CredentialService::new(CredentialScheme::Plain);

        let account_id = AccountService::register(&pool, &credentials, &request("alice", "pw1"))
            .await
            .unwrap();

        for _ in 0..3 {
            let name = AccountService::account_name(&pool, account_id).await.unwrap();
            assert_eq!(name, "alice");
        }

        let err = AccountService::account_name(&pool, account_id + 100)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
