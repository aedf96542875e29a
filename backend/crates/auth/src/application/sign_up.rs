//! Sign Up Use Case
//!
//! Creates a new account plus its role record.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{
    account::Account,
    role_record::{FacultyRecord, StudentRecord},
};
use crate::domain::repository::{AccountRepository, RoleRecordRepository};
use crate::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    email::Email,
};
use crate::error::{AuthError, AuthResult};
use kernel::id::AccountId;

/// Sign up input
///
/// Any preference fields a client sends alongside these are ignored;
/// signup seeds the defaults unconditionally.
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub account_id: AccountId,
}

/// Sign up use case
///
/// Two entry points, one per role; the shared half validates, hashes,
/// and persists the base account. The account insert and the role-record
/// insert are two independent writes with no spanning transaction; a
/// crash between them leaves an account without a role record.
pub struct SignUpUseCase<A, R>
where
    A: AccountRepository,
    R: RoleRecordRepository,
{
    account_repo: Arc<A>,
    role_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<A, R> SignUpUseCase<A, R>
where
    A: AccountRepository,
    R: RoleRecordRepository,
{
    pub fn new(account_repo: Arc<A>, role_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            role_repo,
            config,
        }
    }

    /// Sign up a student account
    pub async fn execute_student(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let account_id = self.signup(input).await?;

        let student = StudentRecord::new(account_id);
        self.role_repo.insert_student(&student).await?;

        tracing::info!(
            account_id = %account_id,
            student_id = %student.student_id,
            "Student signed up"
        );

        Ok(SignUpOutput { account_id })
    }

    /// Sign up a faculty account
    pub async fn execute_faculty(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let account_id = self.signup(input).await?;

        let faculty = FacultyRecord::new(account_id);
        self.role_repo.insert_faculty(&faculty).await?;

        tracing::info!(
            account_id = %account_id,
            faculty_id = %faculty.faculty_id,
            "Faculty signed up"
        );

        Ok(SignUpOutput { account_id })
    }

    /// Shared half: validate, check uniqueness, hash, persist the account
    async fn signup(&self, input: SignUpInput) -> AuthResult<AccountId> {
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidEmailFormat)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidPasswordFormat)?;

        // The uniqueness check and the insert below are not atomic;
        // concurrent duplicate signups are caught by the directory's
        // UNIQUE constraint and surface as a write failure.
        if self.account_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailExists);
        }

        let password_hash = AccountPassword::from_raw(&raw_password, self.config.hash_cost)?;

        // Preferences start from the defaults, whatever the caller sent.
        let account = Account::new(email, password_hash, input.first_name, input.last_name);

        self.account_repo.insert(&account).await
    }
}
