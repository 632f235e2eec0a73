//! Change Password Use Case
//!
//! Replaces a user's credential and logs out every existing session,
//! including the one that made the request. The new credential is stored
//! before any session is deleted, so no session can be opened with the old
//! password after the invalidation.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::session_manager::SessionManager;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::domain::value_object::{credential::PasswordCredential, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// Change password output
#[derive(Debug)]
pub struct ChangePasswordOutput {
    /// Credential now stored for the user
    pub credential: PasswordCredential,
    /// Sessions removed
    pub sessions_invalidated: u64,
}

/// Change password use case
pub struct ChangePasswordUseCase<S, R, C = SystemClock>
where
    S: SessionRepository,
    R: CredentialRepository,
    C: Clock,
{
    sessions: Arc<SessionManager<S, C>>,
    credentials: Arc<R>,
}

impl<S, R, C> ChangePasswordUseCase<S, R, C>
where
    S: SessionRepository,
    R: CredentialRepository,
    C: Clock,
{
    pub fn new(sessions: Arc<SessionManager<S, C>>, credentials: Arc<R>) -> Self {
        Self {
            sessions,
            credentials,
        }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        old_password: &ClearTextPassword,
        new_password: &ClearTextPassword,
    ) -> AuthResult<ChangePasswordOutput> {
        let current = self
            .credentials
            .find_by_user_id(user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !current.verify(old_password) {
            tracing::warn!(user_id = %user_id, "Password change rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let credential = PasswordCredential::hash(new_password)?;
        self.credentials.update(user_id, &credential).await?;

        let sessions_invalidated = self.sessions.invalidate_all_sessions(user_id).await?;

        tracing::info!(
            user_id = %user_id,
            sessions_invalidated,
            "Password changed"
        );

        Ok(ChangePasswordOutput {
            credential,
            sessions_invalidated,
        })
    }
}
