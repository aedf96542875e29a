//! Repository Traits

use crate::domain::entity::Class;
use crate::error::ClassResult;
use kernel::id::{ClassId, FacultyId, StudentId};

/// Class repository trait (classes + membership tables)
#[trait_variant::make(ClassRepository: Send)]
pub trait LocalClassRepository {
    /// Insert a new class
    async fn insert(&self, class: &Class) -> ClassResult<()>;

    /// Find a class by id
    async fn find_by_id(&self, class_id: &ClassId) -> ClassResult<Option<Class>>;

    /// Find a class by join code
    async fn find_by_code(&self, code: &str) -> ClassResult<Option<Class>>;

    /// Rename a class
    async fn rename(&self, class_id: &ClassId, new_name: &str) -> ClassResult<()>;

    /// Add a student to a class
    async fn add_member(&self, class_id: &ClassId, student_id: &StudentId) -> ClassResult<()>;

    /// Student members of a class
    async fn members(&self, class_id: &ClassId) -> ClassResult<Vec<StudentId>>;

    /// Classes a student has joined
    async fn classes_for_student(&self, student_id: &StudentId) -> ClassResult<Vec<Class>>;

    /// Classes a faculty member owns
    async fn classes_for_faculty(&self, faculty_id: &FacultyId) -> ClassResult<Vec<Class>>;
}
