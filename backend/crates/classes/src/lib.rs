//! Classes Backend Module
//!
//! Class management for the classroom platform:
//! - Faculty create classes and hand out join codes
//! - Students join by code
//! - Owning faculty rename their classes
//! - Member and class listings
//!
//! Plain persistence CRUD in the same layered structure as the auth
//! module; role checks come from the caller's session, enforced by the
//! auth middleware upstream.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{ClassError, ClassResult};
pub use infra::postgres::PgClassRepository;
pub use presentation::router::class_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
