//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::session::Session;
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::domain::value_object::{
    credential::PasswordCredential, password_salt::PasswordSalt, session_id::SessionId,
    user_id::UserId,
};
use crate::error::AuthResult;

/// PostgreSQL-backed session store
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgSessionRepository {
    async fn insert(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                id,
                user_id,
                expires_at,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.id.as_str())
        .bind(session.user_id.as_i64())
        .bind(session.expires_at)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> AuthResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                id,
                user_id,
                expires_at,
                created_at
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AuthResult<Vec<Session>> {
        let rows = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                id,
                user_id,
                expires_at,
                created_at
            FROM sessions
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SessionRow::into_session).collect())
    }

    async fn update_expiry(&self, id: &SessionId, expires_at: DateTime<Utc>) -> AuthResult<()> {
        sqlx::query("UPDATE sessions SET expires_at = $2 WHERE id = $1")
            .bind(id.as_str())
            .bind(expires_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> AuthResult<()> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_all_for_user(&self, user_id: UserId) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(user_id.as_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Credential Repository Implementation
// ============================================================================

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CredentialRepository for PgCredentialRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> AuthResult<Option<PasswordCredential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT hashed_password, salt FROM users WHERE id = $1",
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CredentialRow::into_credential).transpose()
    }

    async fn update(&self, user_id: UserId, credential: &PasswordCredential) -> AuthResult<()> {
        sqlx::query("UPDATE users SET hashed_password = $2, salt = $3 WHERE id = $1")
            .bind(user_id.as_i64())
            .bind(credential.hashed_password())
            .bind(credential.salt().to_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: String,
    user_id: i64,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            id: SessionId::from_db(self.id),
            user_id: UserId::new(self.user_id),
            created_at: self.created_at,
            expires_at: self.expires_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    hashed_password: String,
    salt: i64,
}

impl CredentialRow {
    fn into_credential(self) -> AuthResult<PasswordCredential> {
        let salt = PasswordSalt::try_from_i64(self.salt)?;
        PasswordCredential::from_stored(self.hashed_password, salt)
    }
}
