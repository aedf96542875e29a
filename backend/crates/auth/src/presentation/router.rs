//! Auth Router

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AccountRepository, RoleRecordRepository, SessionStore};
use crate::infra::memory::InMemorySessionStore;
use crate::infra::postgres::PgAccountDirectory;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the PostgreSQL directory and the
/// in-memory session store
pub fn auth_router(
    directory: PgAccountDirectory,
    sessions: InMemorySessionStore,
    config: AuthConfig,
) -> Router {
    auth_router_generic(directory, sessions, config)
}

/// Create a generic Auth router for any directory/store implementation
pub fn auth_router_generic<D, S>(directory: D, sessions: S, config: AuthConfig) -> Router
where
    D: AccountRepository + RoleRecordRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        directory: Arc::new(directory),
        sessions: Arc::new(sessions),
        config: Arc::new(config),
    };

    Router::new()
        .route("/signup/student", post(handlers::sign_up_student::<D, S>))
        .route("/signup/faculty", post(handlers::sign_up_faculty::<D, S>))
        .route("/signin", post(handlers::sign_in::<D, S>))
        .route("/signout", post(handlers::sign_out::<D, S>))
        .route("/session", get(handlers::session_status::<D, S>))
        .route("/profile", put(handlers::update_profile::<D, S>))
        .route("/account", delete(handlers::delete_account::<D, S>))
        .with_state(state)
}
