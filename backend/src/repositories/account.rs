//! Account repository for database operations

use super::StorageError;
use sqlx::SqlitePool;

/// Account record from database
///
/// The credential column holds whatever the credential service sealed:
/// plaintext in parity mode, an argon2 hash otherwise.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountRecord {
    pub id: i64,
    pub name: String,
    pub credential: String,
}

/// Account repository for database operations
pub struct AccountRepository;

impl AccountRepository {
    /// Insert a new account and return its surrogate key
    ///
    /// Names are not unique; every call creates a fresh row.
    pub async fn create(
        pool: &SqlitePool,
        name: &str,
        credential: &str,
    ) -> Result<i64, StorageError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO accounts (name, credential)
            VALUES (?, ?)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(credential)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Find the account matching both name and credential
    ///
    /// Joint lookup; a miss does not reveal which field was wrong.
    pub async fn find_by_credentials(
        pool: &SqlitePool,
        name: &str,
        credential: &str,
    ) -> Result<Option<AccountRecord>, StorageError> {
        let account = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, name, credential
            FROM accounts
            WHERE name = ? AND credential = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .bind(credential)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// All accounts carrying a name, oldest first
    ///
    /// Names are not unique, so a login by name has to consider every match.
    pub async fn find_all_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Vec<AccountRecord>, StorageError> {
        let accounts = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, name, credential
            FROM accounts
            WHERE name = ?
            ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(pool)
        .await?;

        Ok(accounts)
    }

    /// Point lookup of an account's name by primary key
    pub async fn find_name(
        pool: &SqlitePool,
        account_id: i64,
    ) -> Result<Option<String>, StorageError> {
        let name = sqlx::query_scalar::<_, String>(
            r#"
            SELECT name
            FROM accounts
            WHERE id = ?
            "#,
        )
        .bind(account_id)
        .fetch_optional(pool)
        .await?;

        Ok(name)
    }

    /// Check whether an account id resolves to a live account
    pub async fn exists(pool: &SqlitePool, account_id: i64) -> Result<bool, StorageError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM accounts WHERE id = ?)
            "#,
        )
        .bind(account_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
