//! Create Class Use Case
//!
//! Faculty-only: creates a class and returns its join code.

use std::sync::Arc;

use crate::domain::entity::Class;
use crate::domain::repository::ClassRepository;
use crate::error::{ClassError, ClassResult};
use kernel::id::FacultyId;

/// Create class use case
pub struct CreateClassUseCase<C>
where
    C: ClassRepository,
{
    class_repo: Arc<C>,
}

impl<C> CreateClassUseCase<C>
where
    C: ClassRepository,
{
    pub fn new(class_repo: Arc<C>) -> Self {
        Self { class_repo }
    }

    /// Create a class owned by `faculty_id`, returning the join code
    pub async fn execute(
        &self,
        faculty_id: FacultyId,
        name: String,
        is_student: bool,
    ) -> ClassResult<String> {
        if is_student {
            return Err(ClassError::InvalidStudentOperation);
        }

        let class = Class::new(faculty_id, name);
        self.class_repo.insert(&class).await?;

        tracing::info!(
            class_id = %class.class_id,
            faculty_id = %faculty_id,
            "Class created"
        );

        Ok(class.code)
    }
}
