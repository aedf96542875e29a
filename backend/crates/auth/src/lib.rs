//! Auth (Accounts & Sessions) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and session store implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Student/faculty signup with email + password
//! - Login issuing opaque session tokens against a volatile store
//! - Session lookup/revocation (logout is idempotent)
//! - Sparse profile updates (names, password change, preferences)
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (per-call random salt, fixed cost)
//! - Unknown email and wrong password return the same login error
//! - Plaintext passwords zeroized in memory, never persisted or returned

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemorySessionStore;
pub use infra::postgres::PgAccountDirectory;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::InMemorySessionStore;
    pub use crate::infra::postgres::PgAccountDirectory as AccountStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
