//! Session Manager
//!
//! Issues, validates, renews and invalidates server-side sessions.
//!
//! ## Lifecycle
//! `Active -> (Renewed -> Active) -> Expired | Invalidated`
//!
//! - The client holds the raw token; the store holds `SessionId::derive(token)`.
//! - A session is expired once `now >= expires_at`. Expired rows stay in the
//!   store until [`SessionManager::purge_expired`] removes them.
//! - On validation, a session younger than the renewal window gets
//!   `expires_at = now + ttl`, written back before the session is returned.

use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{
    session_id::SessionId, session_token::SessionToken, user_id::UserId,
};
use crate::error::{AuthError, AuthResult};

pub struct SessionManager<S, C = SystemClock>
where
    S: SessionRepository,
    C: Clock,
{
    store: Arc<S>,
    config: Arc<SessionConfig>,
    clock: C,
}

impl<S> SessionManager<S, SystemClock>
where
    S: SessionRepository,
{
    pub fn new(store: Arc<S>, config: Arc<SessionConfig>) -> Self {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<S, C> SessionManager<S, C>
where
    S: SessionRepository,
    C: Clock,
{
    pub fn with_clock(store: Arc<S>, config: Arc<SessionConfig>, clock: C) -> Self {
        Self {
            store,
            config,
            clock,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Fresh random token; nothing is stored yet
    pub fn generate_token(&self) -> SessionToken {
        SessionToken::generate(self.config.token_bytes)
    }

    /// Persist a session for `token` owned by `user_id`
    ///
    /// On store failure nothing is returned and the token must be discarded.
    pub async fn create_session(
        &self,
        token: &SessionToken,
        user_id: UserId,
    ) -> AuthResult<Session> {
        let session = Session::new(
            SessionId::derive(token),
            user_id,
            self.clock.now(),
            self.config.session_ttl,
        );

        self.store.insert(&session).await?;

        tracing::info!(
            user_id = %session.user_id,
            session = session.id.short(),
            expires_at = %session.expires_at,
            "Session created"
        );

        Ok(session)
    }

    /// Resolve a presented token to its live session, renewing it if eligible
    pub async fn validate_token(&self, token: &SessionToken) -> AuthResult<Session> {
        let id = SessionId::derive(token);

        let mut session = self
            .store
            .find_by_id(&id)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        let now = self.clock.now();

        if session.is_expired_at(now) {
            tracing::debug!(
                session = id.short(),
                expired_at = %session.expires_at,
                "Rejected expired session"
            );
            return Err(AuthError::SessionExpired);
        }

        if session.renew_if_eligible(now, self.config.session_ttl, self.config.renewal_window) {
            self.store.update_expiry(&session.id, session.expires_at).await?;

            tracing::debug!(
                session = id.short(),
                expires_at = %session.expires_at,
                "Session renewed"
            );
        }

        Ok(session)
    }

    /// Delete one session; a missing session is not an error
    pub async fn invalidate_session(&self, id: &SessionId) -> AuthResult<()> {
        self.store.delete(id).await?;

        tracing::info!(session = id.short(), "Session invalidated");
        Ok(())
    }

    /// Delete every session of a user
    pub async fn invalidate_all_sessions(&self, user_id: UserId) -> AuthResult<u64> {
        let deleted = self.store.delete_all_for_user(user_id).await?;

        tracing::info!(user_id = %user_id, deleted, "All sessions invalidated");
        Ok(deleted)
    }

    /// Live sessions of a user, newest first
    pub async fn sessions_for_user(&self, user_id: UserId) -> AuthResult<Vec<Session>> {
        let now = self.clock.now();
        let sessions = self.store.find_by_user_id(user_id).await?;

        Ok(sessions
            .into_iter()
            .filter(|s| !s.is_expired_at(now))
            .collect())
    }

    /// Remove expired sessions from the store
    pub async fn purge_expired(&self) -> AuthResult<u64> {
        let deleted = self.store.delete_expired(self.clock.now()).await?;

        tracing::info!(sessions_deleted = deleted, "Purged expired sessions");
        Ok(deleted)
    }
}
