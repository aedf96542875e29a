//! Check Session Use Case
//!
//! Resolves a session token back into its stored payload.

use std::sync::Arc;

use crate::domain::entity::session_info::SessionInfo;
use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionStore,
{
    sessions: Arc<S>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionStore,
{
    pub fn new(sessions: Arc<S>) -> Self {
        Self { sessions }
    }

    /// Look up the session info for a token
    ///
    /// Returns `None` for a token with no store entry. A payload that is
    /// present but does not deserialize is an infrastructure error, not
    /// an absent session.
    pub async fn execute(&self, session_token: &str) -> AuthResult<Option<SessionInfo>> {
        let Some(payload) = self.sessions.get(session_token).await? else {
            return Ok(None);
        };

        let info: SessionInfo = serde_json::from_str(&payload)?;
        Ok(Some(info))
    }

    /// Just check whether a token has an active session
    pub async fn is_valid(&self, session_token: &str) -> bool {
        matches!(self.execute(session_token).await, Ok(Some(_)))
    }
}
