//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits, clock
//! - `application/` - Session manager and use cases
//! - `infra/` - Database implementations
//! - `presentation/` - Session cookie helpers
//!
//! ## Features
//! - Salted Argon2id password credentials
//! - Server-side sessions keyed by the SHA-256 digest of a random token
//! - Sliding renewal during the first half of a session's life
//! - Single-session and all-sessions invalidation, expired-session purge
//!
//! ## Security Model
//! - Raw tokens are never persisted; only their digest is
//! - Cleartext passwords and tokens are zeroized on drop and redacted in Debug
//! - Every unauthenticated outcome projects onto one caller-facing error

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::{
    ChangePasswordUseCase, SessionConfig, SessionManager, SignInUseCase, SignOutUseCase,
};
pub use domain::{Clock, CredentialRepository, Session, SessionRepository, SystemClock};
pub use error::{AuthError, AuthResult};
pub use infra::{PgCredentialRepository, PgSessionRepository};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}
