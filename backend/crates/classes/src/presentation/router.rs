//! Class Router

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::ClassRepository;
use crate::infra::postgres::PgClassRepository;
use crate::presentation::handlers::{self, ClassAppState};

/// Create the Class router with the PostgreSQL repository
pub fn class_router(repo: PgClassRepository) -> Router {
    class_router_generic(repo)
}

/// Create a generic Class router for any repository implementation
pub fn class_router_generic<C>(repo: C) -> Router
where
    C: ClassRepository + Clone + Send + Sync + 'static,
{
    let state = ClassAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/insert", post(handlers::insert_class::<C>))
        .route("/join", post(handlers::join_class::<C>))
        .route("/name", put(handlers::rename_class::<C>))
        .route("/members", get(handlers::class_members::<C>))
        .route("/all", get(handlers::all_classes::<C>))
        .with_state(state)
}
