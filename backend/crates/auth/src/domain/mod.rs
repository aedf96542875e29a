//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    account::{Account, Preferences, PreferencesPatch},
    role_record::{FacultyRecord, RoleRecord, StudentRecord},
    session_info::SessionInfo,
};
pub use repository::{AccountRepository, RoleRecordRepository, SessionStore};
