//! Auth Error Types
//!
//! Auth-specific error variants that project onto the unified
//! `kernel::error::AppError` system. Every "not authenticated" outcome maps to
//! the same caller-facing error; the distinction survives only in logs.

use kernel::error::{
    app_error::AppError, conversions::classify_sqlx_error, kind::ErrorKind,
};
use platform::password::PasswordHashError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message shared by every unauthenticated outcome
const UNAUTHENTICATED_MESSAGE: &str = "Authentication required";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// The hashing primitive failed; never caused by password content
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Wrong password at sign-in or password change
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No session stored under the digest of the presented token
    #[error("Session not found")]
    SessionNotFound,

    /// Session exists but its expiry has passed
    #[error("Session expired")]
    SessionExpired,

    /// Store unavailable or write failed; the operation did not apply
    #[error("Persistence error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::SessionNotFound
            | AuthError::SessionExpired => ErrorKind::Unauthorized,
            // A store failure is never the caller's fault
            AuthError::Persistence(e) => match classify_sqlx_error(e).0 {
                ErrorKind::ServiceUnavailable => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
            AuthError::Hashing(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// True for outcomes the caller must treat as "not logged in"
    pub fn is_unauthenticated(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }

    /// Convert to a caller-safe AppError
    ///
    /// The message never says which unauthenticated case occurred and never
    /// carries store details.
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::Unauthorized => AppError::unauthorized(UNAUTHENTICATED_MESSAGE),
            ErrorKind::ServiceUnavailable => {
                AppError::service_unavailable("Service temporarily unavailable")
            }
            _ => AppError::internal("Internal server error"),
        }
    }

    /// Log the error with appropriate level
    ///
    /// Server-side failures go out at error level with their cause; the
    /// unauthenticated cases keep their distinction here and nowhere else.
    pub fn log(&self) {
        if self.kind().is_server_error() {
            tracing::error!(error = %self, "Auth operation failed");
            return;
        }

        match self {
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid credentials presented");
            }
            AuthError::SessionExpired => {
                tracing::debug!("Expired session presented");
            }
            AuthError::SessionNotFound => {
                tracing::debug!("Unknown session presented");
            }
            _ => {}
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.log();
        err.to_app_error().with_source(err)
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        match err {
            PasswordHashError::HashingFailed(msg) => AuthError::Hashing(msg),
            PasswordHashError::InvalidHashFormat => {
                AuthError::Internal("Stored password hash is malformed".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_cases_look_identical() {
        let cases = [
            AuthError::SessionNotFound,
            AuthError::SessionExpired,
            AuthError::InvalidCredentials,
        ];

        let messages: Vec<String> = cases
            .iter()
            .map(|e| e.to_app_error().to_string())
            .collect();

        assert!(cases.iter().all(|e| e.is_unauthenticated()));
        assert!(messages.iter().all(|m| m == &messages[0]));
        assert_eq!(cases[0].to_app_error().status_code(), 401);
    }

    #[test]
    fn test_persistence_kinds() {
        let unavailable = AuthError::Persistence(sqlx::Error::PoolTimedOut);
        assert_eq!(unavailable.kind(), ErrorKind::ServiceUnavailable);
        assert!(!unavailable.is_unauthenticated());

        let broken = AuthError::Persistence(sqlx::Error::ColumnNotFound("id".into()));
        assert_eq!(broken.kind(), ErrorKind::InternalServerError);
    }

    /// Minimal driver error carrying a SQLSTATE code
    #[derive(Debug)]
    struct PgStateError(&'static str);

    impl std::fmt::Display for PgStateError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "sqlstate {}", self.0)
        }
    }

    impl std::error::Error for PgStateError {}

    impl sqlx::error::DatabaseError for PgStateError {
        fn message(&self) -> &str {
            "database rejected the statement"
        }

        fn code(&self) -> Option<std::borrow::Cow<'_, str>> {
            Some(self.0.into())
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            match self.0 {
                "23505" => sqlx::error::ErrorKind::UniqueViolation,
                "23514" => sqlx::error::ErrorKind::CheckViolation,
                _ => sqlx::error::ErrorKind::Other,
            }
        }
    }

    fn db_error(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(PgStateError(code)))
    }

    #[test]
    fn test_persistence_is_always_server_error() {
        let cases = [
            sqlx::Error::RowNotFound,
            db_error("23505"),
            db_error("23514"),
            db_error("23503"),
            db_error("42501"),
        ];

        for cause in cases {
            let label = cause.to_string();
            let app = AuthError::Persistence(cause).to_app_error();
            assert!(app.status_code() >= 500, "{label}: {}", app.status_code());
            assert_eq!(app.kind(), ErrorKind::InternalServerError);
        }
    }

    #[test]
    fn test_persistence_unavailable_kept() {
        let err = AuthError::Persistence(db_error("57P01"));
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(err.to_app_error().status_code(), 503);
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = AuthError::Hashing("argon2 exploded".to_string());
        let app = err.to_app_error();
        assert_eq!(app.status_code(), 500);
        assert!(!app.to_string().contains("argon2"));
    }

    #[test]
    fn test_into_app_error_keeps_source() {
        use std::error::Error as _;

        let app: AppError = AuthError::SessionExpired.into();
        assert_eq!(app.kind(), ErrorKind::Unauthorized);
        assert_eq!(app.source().map(|s| s.to_string()), Some("Session expired".to_string()));
    }

    #[test]
    fn test_password_hash_error_conversion() {
        let err: AuthError = PasswordHashError::HashingFailed("oom".to_string()).into();
        assert!(matches!(err, AuthError::Hashing(_)));

        let err: AuthError = PasswordHashError::InvalidHashFormat.into();
        assert!(matches!(err, AuthError::Internal(_)));
    }
}
