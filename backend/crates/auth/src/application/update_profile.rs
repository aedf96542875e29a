//! Update Profile Use Case
//!
//! Applies a sparse patch to an account, one field at a time.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::PreferencesPatch;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_password::{AccountPassword, RawPassword};
use crate::error::{AuthError, AuthResult};
use kernel::id::AccountId;

/// Sparse profile patch
///
/// Absent fields are left untouched. The password pair is only applied
/// when both halves are present.
#[derive(Debug, Default)]
pub struct ProfileUpdateInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
    pub preferences: Option<PreferencesPatch>,
}

/// Update profile use case
///
/// Each sub-update is an independent directory write; a failure midway
/// leaves the earlier writes applied.
pub struct UpdateProfileUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> UpdateProfileUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    /// Apply the present fields in order: first name, last name,
    /// password pair, preferences.
    pub async fn execute(&self, account_id: &AccountId, patch: ProfileUpdateInput) -> AuthResult<()> {
        if let Some(first_name) = patch.first_name {
            self.update_first_name(account_id, &first_name).await?;
        }

        if let Some(last_name) = patch.last_name {
            self.update_last_name(account_id, &last_name).await?;
        }

        if let (Some(old), Some(new)) = (patch.old_password, patch.new_password) {
            self.update_password(account_id, old, new).await?;
        }

        if let Some(preferences) = patch.preferences {
            self.update_preferences(account_id, preferences).await?;
        }

        Ok(())
    }

    /// Unconditional single-field write
    pub async fn update_first_name(
        &self,
        account_id: &AccountId,
        first_name: &str,
    ) -> AuthResult<()> {
        self.account_repo
            .update_first_name(account_id, first_name)
            .await
    }

    /// Unconditional single-field write
    pub async fn update_last_name(
        &self,
        account_id: &AccountId,
        last_name: &str,
    ) -> AuthResult<()> {
        self.account_repo
            .update_last_name(account_id, last_name)
            .await
    }

    /// Change the password after verifying the old one
    pub async fn update_password(
        &self,
        account_id: &AccountId,
        old_password: String,
        new_password: String,
    ) -> AuthResult<()> {
        let account = self
            .account_repo
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::UpdateFieldRejected)?;

        let old = RawPassword::unchecked(old_password);
        if !account.password_hash.verify(&old)? {
            return Err(AuthError::UpdateFieldRejected);
        }

        let new =
            RawPassword::new(new_password).map_err(|_| AuthError::InvalidPasswordFormat)?;
        let password_hash = AccountPassword::from_raw(&new, self.config.hash_cost)?;

        self.account_repo
            .update_password(account_id, &password_hash)
            .await?;

        tracing::info!(account_id = %account_id, "Account password changed");
        Ok(())
    }

    /// Merge a preferences patch onto the stored triple and persist it
    /// as one write
    pub async fn update_preferences(
        &self,
        account_id: &AccountId,
        patch: PreferencesPatch,
    ) -> AuthResult<()> {
        let account = self
            .account_repo
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::UpdateFieldRejected)?;

        let merged = patch.merged_onto(&account.preferences);

        self.account_repo
            .update_preferences(account_id, &merged)
            .await
    }
}
