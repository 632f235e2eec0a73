//! Sign In Use Case
//!
//! Checks a password against the user's stored credential and opens a session.
//! Looking up the user and their credential is the caller's job.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::session_manager::SessionManager;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{
    credential::PasswordCredential, session_token::SessionToken, user_id::UserId,
};
use crate::error::{AuthError, AuthResult};

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Raw token for the cookie; never stored server-side
    pub session_token: SessionToken,
    pub session: Session,
    /// The stored hash should be upgraded while the password is at hand
    pub needs_rehash: bool,
}

/// Sign in use case
pub struct SignInUseCase<S, C = SystemClock>
where
    S: SessionRepository,
    C: Clock,
{
    sessions: Arc<SessionManager<S, C>>,
}

impl<S, C> SignInUseCase<S, C>
where
    S: SessionRepository,
    C: Clock,
{
    pub fn new(sessions: Arc<SessionManager<S, C>>) -> Self {
        Self { sessions }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        credential: &PasswordCredential,
        password: &ClearTextPassword,
    ) -> AuthResult<SignInOutput> {
        if !credential.verify(password) {
            tracing::warn!(user_id = %user_id, "Sign in rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let session_token = self.sessions.generate_token();
        let session = self.sessions.create_session(&session_token, user_id).await?;

        tracing::info!(user_id = %user_id, "User signed in");

        Ok(SignInOutput {
            session_token,
            session,
            needs_rehash: credential.needs_rehash(),
        })
    }
}
