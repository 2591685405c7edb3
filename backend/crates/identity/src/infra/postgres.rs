//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{account::Account, user::User};
use crate::domain::repository::{
    AccountRepository, ProfileChanges, ProvisioningRepository, UserRepository,
};
use crate::domain::value_object::{
    account_id::AccountId, email::Email, user_id::UserId, user_password::UserPassword,
};
use crate::error::{IdentityError, IdentityResult};

/// PostgreSQL unique-violation error code
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed identity repository
#[derive(Clone)]
pub struct PgIdentityRepository {
    pool: PgPool,
}

impl PgIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Map an insert error, surfacing a username unique-violation as the
    /// conflict error instead of a generic database failure.
    fn map_insert_error(err: sqlx::Error) -> IdentityError {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return IdentityError::UsernameTaken;
            }
        }
        IdentityError::Database(err)
    }
}

/// Escape LIKE metacharacters so a filter matches literally.
fn escape_like(filter: &str) -> String {
    filter
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgIdentityRepository {
    async fn find_by_id(&self, user_id: &UserId) -> IdentityResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                username,
                first_name,
                last_name,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn find_by_username(&self, username: &Email) -> IdentityResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                username,
                first_name,
                last_name,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn exists_by_username(&self, username: &Email) -> IdentityResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update_profile(
        &self,
        user_id: &UserId,
        changes: &ProfileChanges,
    ) -> IdentityResult<()> {
        // COALESCE keeps the stored value wherever the change-set is NULL,
        // so unspecified fields are untouched.
        sqlx::query(
            r#"
            UPDATE users SET
                password_hash = COALESCE($2, password_hash),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                updated_at = $5
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(changes.password_hash.as_ref().map(|p| p.as_phc_string()))
        .bind(changes.first_name.as_deref())
        .bind(changes.last_name.as_deref())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn search_by_name(&self, filter: &str) -> IdentityResult<Vec<User>> {
        // Empty filter yields '%%' and matches every user. Ordering by
        // user_id keeps results deterministic.
        let pattern = format!("%{}%", escape_like(filter));

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                username,
                first_name,
                last_name,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE first_name ILIKE $1 OR last_name ILIKE $1
            ORDER BY user_id
            "#,
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgIdentityRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> IdentityResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                user_id,
                balance,
                created_at
            FROM accounts
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_account()))
    }
}

// ============================================================================
// Provisioning (signup unit of work)
// ============================================================================

impl ProvisioningRepository for PgIdentityRepository {
    async fn create_user_with_account(
        &self,
        user: &User,
        account: &Account,
    ) -> IdentityResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                username,
                first_name,
                last_name,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.username.as_str())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.password_hash.as_phc_string())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(Self::map_insert_error)?;

        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                user_id,
                balance,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.user_id.as_uuid())
        .bind(account.balance)
        .bind(account.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    username: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            username: Email::from_db(self.username),
            first_name: self.first_name,
            last_name: self.last_name,
            password_hash: UserPassword::from_storage(self.password_hash),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    user_id: Uuid,
    balance: f64,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> Account {
        Account {
            account_id: AccountId::from_uuid(self.account_id),
            user_id: UserId::from_uuid(self.user_id),
            balance: self.balance,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("ali"), "ali");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
