//! Domain Layer
//!
//! Contains entities, value objects, the repository trait and the time source.

pub mod clock;
pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use clock::{Clock, SystemClock};
pub use entity::session::Session;
pub use repository::{CredentialRepository, SessionRepository};
