//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate holds the error vocabulary shared by every backend crate:
//! - [`error::kind::ErrorKind`] classifies a failure for the caller
//! - [`error::app_error::AppError`] carries a caller-safe message and the hidden cause
//! - Conversions from infrastructure errors (sqlx, behind the `sqlx` feature)
//!
//! Only things whose meaning is identical across crates belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
