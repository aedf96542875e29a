//! Join Class Use Case
//!
//! Student-only: attaches a student to a class by join code.

use std::sync::Arc;

use crate::domain::repository::ClassRepository;
use crate::error::{ClassError, ClassResult};
use kernel::id::StudentId;

/// Join class use case
pub struct JoinClassUseCase<C>
where
    C: ClassRepository,
{
    class_repo: Arc<C>,
}

impl<C> JoinClassUseCase<C>
where
    C: ClassRepository,
{
    pub fn new(class_repo: Arc<C>) -> Self {
        Self { class_repo }
    }

    pub async fn execute(
        &self,
        student_id: StudentId,
        code: &str,
        is_student: bool,
    ) -> ClassResult<()> {
        if !is_student {
            return Err(ClassError::InvalidFacultyOperation);
        }

        let class = self
            .class_repo
            .find_by_code(code)
            .await?
            .ok_or(ClassError::ClassNotFound)?;

        self.class_repo
            .add_member(&class.class_id, &student_id)
            .await?;

        tracing::info!(
            class_id = %class.class_id,
            student_id = %student_id,
            "Student joined class"
        );

        Ok(())
    }
}
