//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};

use crate::domain::entity::session::Session;
use crate::domain::value_object::{
    credential::PasswordCredential, session_id::SessionId, user_id::UserId,
};
use crate::error::AuthResult;

/// Session store
///
/// Inserts are atomic and visible to later reads. Deletes are unconditional
/// hard deletes and succeed when nothing matches.
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Insert a new session; `id` is the primary key
    async fn insert(&self, session: &Session) -> AuthResult<()>;

    /// Find session by digest
    async fn find_by_id(&self, id: &SessionId) -> AuthResult<Option<Session>>;

    /// All sessions of a user, expired ones included, newest first
    async fn find_by_user_id(&self, user_id: UserId) -> AuthResult<Vec<Session>>;

    /// Overwrite the expiry of one session
    async fn update_expiry(&self, id: &SessionId, expires_at: DateTime<Utc>) -> AuthResult<()>;

    /// Delete a session
    async fn delete(&self, id: &SessionId) -> AuthResult<()>;

    /// Delete all sessions for a user, returning how many were removed
    async fn delete_all_for_user(&self, user_id: UserId) -> AuthResult<u64>;

    /// Delete every session whose expiry is at or before `now`
    async fn delete_expired(&self, now: DateTime<Utc>) -> AuthResult<u64>;
}

/// Credential store over the externally managed `users` table
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Stored credential of a user, `None` if the user does not exist
    async fn find_by_user_id(&self, user_id: UserId) -> AuthResult<Option<PasswordCredential>>;

    /// Replace hash and salt together
    async fn update(&self, user_id: UserId, credential: &PasswordCredential) -> AuthResult<()>;
}
