//! Repository Traits
//!
//! Interfaces for the two external collaborators: the persistent account
//! directory and the volatile session store. Implementations live in the
//! infrastructure layer.

use crate::domain::entity::{
    account::{Account, Preferences},
    role_record::{FacultyRecord, StudentRecord},
};
use crate::domain::value_object::{account_password::AccountPassword, email::Email};
use crate::error::AuthResult;
use kernel::id::AccountId;

/// Account directory trait (accounts table)
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert a new account, returning its assigned id
    async fn insert(&self, account: &Account) -> AuthResult<AccountId>;

    /// Find account by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// Find account by id
    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Overwrite the first name
    async fn update_first_name(&self, account_id: &AccountId, first_name: &str) -> AuthResult<()>;

    /// Overwrite the last name
    async fn update_last_name(&self, account_id: &AccountId, last_name: &str) -> AuthResult<()>;

    /// Overwrite the password hash
    async fn update_password(
        &self,
        account_id: &AccountId,
        password_hash: &AccountPassword,
    ) -> AuthResult<()>;

    /// Overwrite the full preferences triple in one write
    async fn update_preferences(
        &self,
        account_id: &AccountId,
        preferences: &Preferences,
    ) -> AuthResult<()>;

    /// Delete an account
    async fn delete(&self, account_id: &AccountId) -> AuthResult<()>;
}

/// Role record directory trait (students / faculty tables)
///
/// The two variants have separate operations; the caller picks the one
/// matching the declared role.
#[trait_variant::make(RoleRecordRepository: Send)]
pub trait LocalRoleRecordRepository {
    /// Insert a student record
    async fn insert_student(&self, student: &StudentRecord) -> AuthResult<()>;

    /// Insert a faculty record
    async fn insert_faculty(&self, faculty: &FacultyRecord) -> AuthResult<()>;

    /// Find the student record referencing an account
    async fn find_student_by_account(
        &self,
        account_id: &AccountId,
    ) -> AuthResult<Option<StudentRecord>>;

    /// Find the faculty record referencing an account
    async fn find_faculty_by_account(
        &self,
        account_id: &AccountId,
    ) -> AuthResult<Option<FacultyRecord>>;
}

/// Session store trait
///
/// Token → serialized-payload key/value store. Volatile: entries may be
/// evicted by the store at any time and do not survive restarts. Any
/// connection establishment is the implementation's concern and must be
/// idempotent.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Store a payload under a token
    async fn set(&self, token: &str, payload: &str) -> AuthResult<()>;

    /// Fetch the payload for a token, if present
    async fn get(&self, token: &str) -> AuthResult<Option<String>>;

    /// Remove a token; deleting an absent token is not an error
    async fn del(&self, token: &str) -> AuthResult<()>;
}
