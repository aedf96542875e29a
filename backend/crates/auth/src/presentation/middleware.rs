//! Auth Middleware
//!
//! Middleware for requiring an active session on protected routes.

use axum::body::Body;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionStore;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires an active session
///
/// On success the resolved [`SessionInfo`](crate::domain::SessionInfo)
/// is inserted into request extensions for downstream handlers.
pub async fn require_session<S>(
    state: AuthMiddlewareState<S>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let token = extract_session_token(req.headers(), &state.config)
        .ok_or_else(|| AuthError::SessionRequired.into_response())?;

    let use_case = CheckSessionUseCase::new(state.sessions.clone());

    let session = match use_case.execute(&token).await {
        Ok(Some(session)) => session,
        Ok(None) => return Err(AuthError::SessionRequired.into_response()),
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}

/// Session token from the cookie, or a bearer Authorization header
fn extract_session_token(headers: &HeaderMap, config: &AuthConfig) -> Option<String> {
    if let Some(token) = platform::cookie::extract_cookie(headers, &config.session_cookie_name) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|t| t.to_string())
}
