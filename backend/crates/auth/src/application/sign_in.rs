//! Sign In Use Case
//!
//! Authenticates an account and issues a session token.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entity::session_info::SessionInfo;
use crate::domain::repository::{AccountRepository, RoleRecordRepository, SessionStore};
use crate::domain::value_object::{account_password::RawPassword, email::Email};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
///
/// Everything a client needs after login; never includes the password
/// hash or internal record ids.
#[derive(Debug)]
pub struct SignInOutput {
    pub first_name: String,
    pub last_name: String,
    pub session_token: String,
    pub ui_theme: String,
    pub editor_theme: String,
    pub wants_email_notifications: bool,
    pub is_student: bool,
}

/// Sign in use case
pub struct SignInUseCase<A, R, S>
where
    A: AccountRepository,
    R: RoleRecordRepository,
    S: SessionStore,
{
    account_repo: Arc<A>,
    role_repo: Arc<R>,
    sessions: Arc<S>,
}

impl<A, R, S> SignInUseCase<A, R, S>
where
    A: AccountRepository,
    R: RoleRecordRepository,
    S: SessionStore,
{
    pub fn new(account_repo: Arc<A>, role_repo: Arc<R>, sessions: Arc<S>) -> Self {
        Self {
            account_repo,
            role_repo,
            sessions,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A malformed email cannot name an account; collapse it into the
        // same error as an unknown one.
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidEmailPassword)?;

        let account = self
            .account_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidEmailPassword)?;

        let raw_password = RawPassword::unchecked(input.password);

        // Same error as the unknown-email path, so a caller cannot tell
        // which half of the credentials was wrong.
        if !account.password_hash.verify(&raw_password)? {
            return Err(AuthError::InvalidEmailPassword);
        }

        // Resolve the role: student first, faculty otherwise. An account
        // with neither record is a data-integrity fault.
        let session_info = match self
            .role_repo
            .find_student_by_account(&account.account_id)
            .await?
        {
            Some(student) => SessionInfo::for_student(account.account_id, student.student_id),
            None => {
                let faculty = self
                    .role_repo
                    .find_faculty_by_account(&account.account_id)
                    .await?
                    .ok_or_else(|| {
                        AuthError::Internal(format!(
                            "Account {} has no role record",
                            account.account_id
                        ))
                    })?;
                SessionInfo::for_faculty(account.account_id, faculty.faculty_id)
            }
        };

        // Issue the session: fresh random token, serialized payload.
        let session_token = Uuid::new_v4().to_string();
        let payload = serde_json::to_string(&session_info)?;
        self.sessions.set(&session_token, &payload).await?;

        tracing::info!(
            account_id = %account.account_id,
            is_student = session_info.is_student,
            "Account signed in"
        );

        Ok(SignInOutput {
            first_name: account.first_name,
            last_name: account.last_name,
            session_token,
            ui_theme: account.preferences.ui_theme,
            editor_theme: account.preferences.editor_theme,
            wants_email_notifications: account.preferences.wants_email_notifications,
            is_student: session_info.is_student,
        })
    }
}
