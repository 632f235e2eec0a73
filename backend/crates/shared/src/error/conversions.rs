//! Error conversions - From implementations for infrastructure errors
//!
//! Provides automatic conversion from storage errors to [`AppError`].
//! Messages are generic; the original error is attached as the source.

#[cfg(feature = "sqlx")]
use super::{app_error::AppError, kind::ErrorKind};

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classify a sqlx error without consuming it
///
/// Returns the kind and a generic, caller-safe message.
#[cfg(feature = "sqlx")]
pub fn classify_sqlx_error(err: &sqlx::Error) -> (ErrorKind, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => (
            ErrorKind::ServiceUnavailable,
            "Database connection pool exhausted",
        ),
        sqlx::Error::Database(db_err) => {
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            match db_err.code().as_deref() {
                // Class 23: Integrity Constraint Violation
                Some("23503") => (ErrorKind::Conflict, "Foreign key violation"),
                Some("23505") => (ErrorKind::Conflict, "Duplicate key value"),
                Some("23502") => (ErrorKind::BadRequest, "Required field is null"),
                Some("23514") => (ErrorKind::BadRequest, "Check constraint violation"),
                // Class 42: Access Rule Violation
                Some("42501") => (ErrorKind::Forbidden, "Insufficient privilege"),
                // Class 53: Insufficient Resources
                Some("53000" | "53100" | "53200" | "53300") => {
                    (ErrorKind::ServiceUnavailable, "Database resource exhausted")
                }
                // Class 57: Operator Intervention
                Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                    (ErrorKind::ServiceUnavailable, "Database unavailable")
                }
                _ => (ErrorKind::InternalServerError, "Database error"),
            }
        }
        sqlx::Error::Io(_) => (ErrorKind::ServiceUnavailable, "Database connection error"),
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let (kind, message) = classify_sqlx_error(&err);
        AppError::new(kind, message).with_source(err)
    }
}
