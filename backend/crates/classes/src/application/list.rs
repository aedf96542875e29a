//! Listing Use Cases
//!
//! Class members and per-entity class listings.

use std::sync::Arc;

use crate::domain::entity::Class;
use crate::domain::repository::ClassRepository;
use crate::error::{ClassError, ClassResult};
use kernel::id::{ClassId, FacultyId, StudentId};

/// Listing use case
pub struct ListClassesUseCase<C>
where
    C: ClassRepository,
{
    class_repo: Arc<C>,
}

impl<C> ListClassesUseCase<C>
where
    C: ClassRepository,
{
    pub fn new(class_repo: Arc<C>) -> Self {
        Self { class_repo }
    }

    /// Student members of a class
    pub async fn members(&self, class_id: ClassId) -> ClassResult<Vec<StudentId>> {
        // Distinguish "unknown class" from "empty class".
        self.class_repo
            .find_by_id(&class_id)
            .await?
            .ok_or(ClassError::ClassNotFound)?;

        self.class_repo.members(&class_id).await
    }

    /// Classes a student has joined
    pub async fn for_student(&self, student_id: StudentId) -> ClassResult<Vec<Class>> {
        self.class_repo.classes_for_student(&student_id).await
    }

    /// Classes a faculty member owns
    pub async fn for_faculty(&self, faculty_id: FacultyId) -> ClassResult<Vec<Class>> {
        self.class_repo.classes_for_faculty(&faculty_id).await
    }
}
