//! PostgreSQL Account Directory Implementation

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    account::{Account, Preferences},
    role_record::{FacultyRecord, StudentRecord},
};
use crate::domain::repository::{AccountRepository, RoleRecordRepository};
use crate::domain::value_object::{account_password::AccountPassword, email::Email};
use crate::error::AuthResult;
use kernel::id::{AccountId, FacultyId, StudentId};

/// PostgreSQL-backed account directory
///
/// Implements both the account and the role-record halves of the
/// directory against one pool.
#[derive(Clone)]
pub struct PgAccountDirectory {
    pool: PgPool,
}

impl PgAccountDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgAccountDirectory {
    async fn insert(&self, account: &Account) -> AuthResult<AccountId> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                email,
                password_hash,
                first_name,
                last_name,
                ui_theme,
                editor_theme,
                wants_email_notifications
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_str())
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.preferences.ui_theme)
        .bind(&account.preferences.editor_theme)
        .bind(account.preferences.wants_email_notifications)
        .execute(&self.pool)
        .await?;

        Ok(account.account_id)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                password_hash,
                first_name,
                last_name,
                ui_theme,
                editor_theme,
                wants_email_notifications
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AccountRow::into_account))
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                password_hash,
                first_name,
                last_name,
                ui_theme,
                editor_theme,
                wants_email_notifications
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AccountRow::into_account))
    }

    async fn update_first_name(&self, account_id: &AccountId, first_name: &str) -> AuthResult<()> {
        sqlx::query("UPDATE accounts SET first_name = $2 WHERE account_id = $1")
            .bind(account_id.as_uuid())
            .bind(first_name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_last_name(&self, account_id: &AccountId, last_name: &str) -> AuthResult<()> {
        sqlx::query("UPDATE accounts SET last_name = $2 WHERE account_id = $1")
            .bind(account_id.as_uuid())
            .bind(last_name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_password(
        &self,
        account_id: &AccountId,
        password_hash: &AccountPassword,
    ) -> AuthResult<()> {
        sqlx::query("UPDATE accounts SET password_hash = $2 WHERE account_id = $1")
            .bind(account_id.as_uuid())
            .bind(password_hash.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_preferences(
        &self,
        account_id: &AccountId,
        preferences: &Preferences,
    ) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE accounts SET
                ui_theme = $2,
                editor_theme = $3,
                wants_email_notifications = $4
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(&preferences.ui_theme)
        .bind(&preferences.editor_theme)
        .bind(preferences.wants_email_notifications)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, account_id: &AccountId) -> AuthResult<()> {
        sqlx::query("DELETE FROM accounts WHERE account_id = $1")
            .bind(account_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Role Record Repository Implementation
// ============================================================================

impl RoleRecordRepository for PgAccountDirectory {
    async fn insert_student(&self, student: &StudentRecord) -> AuthResult<()> {
        sqlx::query("INSERT INTO students (student_id, account_id) VALUES ($1, $2)")
            .bind(student.student_id.as_uuid())
            .bind(student.account_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn insert_faculty(&self, faculty: &FacultyRecord) -> AuthResult<()> {
        sqlx::query("INSERT INTO faculty (faculty_id, account_id) VALUES ($1, $2)")
            .bind(faculty.faculty_id.as_uuid())
            .bind(faculty.account_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_student_by_account(
        &self,
        account_id: &AccountId,
    ) -> AuthResult<Option<StudentRecord>> {
        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT student_id, account_id FROM students WHERE account_id = $1",
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StudentRow::into_record))
    }

    async fn find_faculty_by_account(
        &self,
        account_id: &AccountId,
    ) -> AuthResult<Option<FacultyRecord>> {
        let row = sqlx::query_as::<_, FacultyRow>(
            "SELECT faculty_id, account_id FROM faculty WHERE account_id = $1",
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(FacultyRow::into_record))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    ui_theme: String,
    editor_theme: String,
    wants_email_notifications: bool,
}

impl AccountRow {
    fn into_account(self) -> Account {
        Account {
            account_id: AccountId::from_uuid(self.account_id),
            email: Email::from_db(self.email),
            password_hash: AccountPassword::from_hash_string(self.password_hash),
            first_name: self.first_name,
            last_name: self.last_name,
            preferences: Preferences {
                ui_theme: self.ui_theme,
                editor_theme: self.editor_theme,
                wants_email_notifications: self.wants_email_notifications,
            },
        }
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    student_id: Uuid,
    account_id: Uuid,
}

impl StudentRow {
    fn into_record(self) -> StudentRecord {
        StudentRecord {
            student_id: StudentId::from_uuid(self.student_id),
            account_id: AccountId::from_uuid(self.account_id),
        }
    }
}

#[derive(sqlx::FromRow)]
struct FacultyRow {
    faculty_id: Uuid,
    account_id: Uuid,
}

impl FacultyRow {
    fn into_record(self) -> FacultyRecord {
        FacultyRecord {
            faculty_id: FacultyId::from_uuid(self.faculty_id),
            account_id: AccountId::from_uuid(self.account_id),
        }
    }
}
