//! Rename Class Use Case
//!
//! Owning-faculty-only: updates a class name in the database. The UI
//! needs a refresh to pick up the change.

use std::sync::Arc;

use crate::domain::repository::ClassRepository;
use crate::error::{ClassError, ClassResult};
use kernel::id::{ClassId, FacultyId};

/// Rename class use case
pub struct RenameClassUseCase<C>
where
    C: ClassRepository,
{
    class_repo: Arc<C>,
}

impl<C> RenameClassUseCase<C>
where
    C: ClassRepository,
{
    pub fn new(class_repo: Arc<C>) -> Self {
        Self { class_repo }
    }

    pub async fn execute(
        &self,
        class_id: ClassId,
        faculty_id: FacultyId,
        is_student: bool,
        new_name: &str,
    ) -> ClassResult<()> {
        if is_student {
            return Err(ClassError::InvalidStudentOperation);
        }

        let class = self
            .class_repo
            .find_by_id(&class_id)
            .await?
            .ok_or(ClassError::ClassNotFound)?;

        if class.faculty_id != faculty_id {
            return Err(ClassError::InvalidFacultyOperation);
        }

        self.class_repo.rename(&class_id, new_name).await?;

        tracing::info!(class_id = %class_id, "Class renamed");
        Ok(())
    }
}
