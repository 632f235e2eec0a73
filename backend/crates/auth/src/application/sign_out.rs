//! Sign Out Use Case
//!
//! Invalidates the session behind a presented token.

use std::sync::Arc;

use crate::application::session_manager::SessionManager;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{session_id::SessionId, session_token::SessionToken};
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S, C = SystemClock>
where
    S: SessionRepository,
    C: Clock,
{
    sessions: Arc<SessionManager<S, C>>,
}

impl<S, C> SignOutUseCase<S, C>
where
    S: SessionRepository,
    C: Clock,
{
    pub fn new(sessions: Arc<SessionManager<S, C>>) -> Self {
        Self { sessions }
    }

    /// Sign out from current session
    ///
    /// Idempotent: an unknown or already-deleted token succeeds.
    pub async fn execute(&self, session_token: &SessionToken) -> AuthResult<()> {
        let session_id = SessionId::derive(session_token);
        self.sessions.invalidate_session(&session_id).await
    }
}
