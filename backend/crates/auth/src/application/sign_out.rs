//! Sign Out Use Case
//!
//! Revokes a session token.

use std::sync::Arc;

use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionStore,
{
    sessions: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(sessions: Arc<S>) -> Self {
        Self { sessions }
    }

    /// Remove the token's session entry
    ///
    /// Idempotent: signing out an already-absent token succeeds.
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        self.sessions.del(session_token).await?;

        tracing::info!("Account signed out");
        Ok(())
    }
}
