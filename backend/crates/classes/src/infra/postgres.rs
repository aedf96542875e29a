//! PostgreSQL Class Repository Implementation

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::Class;
use crate::domain::repository::ClassRepository;
use crate::error::ClassResult;
use kernel::id::{ClassId, FacultyId, StudentId};

/// PostgreSQL-backed class repository
#[derive(Clone)]
pub struct PgClassRepository {
    pool: PgPool,
}

impl PgClassRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ClassRepository for PgClassRepository {
    async fn insert(&self, class: &Class) -> ClassResult<()> {
        sqlx::query(
            r#"
            INSERT INTO classes (class_id, faculty_id, name, code)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(class.class_id.as_uuid())
        .bind(class.faculty_id.as_uuid())
        .bind(&class.name)
        .bind(&class.code)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, class_id: &ClassId) -> ClassResult<Option<Class>> {
        let row = sqlx::query_as::<_, ClassRow>(
            "SELECT class_id, faculty_id, name, code FROM classes WHERE class_id = $1",
        )
        .bind(class_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ClassRow::into_class))
    }

    async fn find_by_code(&self, code: &str) -> ClassResult<Option<Class>> {
        let row = sqlx::query_as::<_, ClassRow>(
            "SELECT class_id, faculty_id, name, code FROM classes WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ClassRow::into_class))
    }

    async fn rename(&self, class_id: &ClassId, new_name: &str) -> ClassResult<()> {
        sqlx::query("UPDATE classes SET name = $2 WHERE class_id = $1")
            .bind(class_id.as_uuid())
            .bind(new_name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn add_member(&self, class_id: &ClassId, student_id: &StudentId) -> ClassResult<()> {
        // Joining twice is a no-op, not an error.
        sqlx::query(
            r#"
            INSERT INTO class_members (class_id, student_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(class_id.as_uuid())
        .bind(student_id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn members(&self, class_id: &ClassId) -> ClassResult<Vec<StudentId>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT student_id FROM class_members WHERE class_id = $1",
        )
        .bind(class_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| StudentId::from_uuid(r.student_id))
            .collect())
    }

    async fn classes_for_student(&self, student_id: &StudentId) -> ClassResult<Vec<Class>> {
        let rows = sqlx::query_as::<_, ClassRow>(
            r#"
            SELECT c.class_id, c.faculty_id, c.name, c.code
            FROM classes c
            JOIN class_members m ON m.class_id = c.class_id
            WHERE m.student_id = $1
            "#,
        )
        .bind(student_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ClassRow::into_class).collect())
    }

    async fn classes_for_faculty(&self, faculty_id: &FacultyId) -> ClassResult<Vec<Class>> {
        let rows = sqlx::query_as::<_, ClassRow>(
            "SELECT class_id, faculty_id, name, code FROM classes WHERE faculty_id = $1",
        )
        .bind(faculty_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ClassRow::into_class).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ClassRow {
    class_id: Uuid,
    faculty_id: Uuid,
    name: String,
    code: String,
}

impl ClassRow {
    fn into_class(self) -> Class {
        Class {
            class_id: ClassId::from_uuid(self.class_id),
            faculty_id: FacultyId::from_uuid(self.faculty_id),
            name: self.name,
            code: self.code,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    student_id: Uuid,
}
