//! Delete Account Use Case
//!
//! Forwards straight to the directory; no additional invariant here.

use std::sync::Arc;

use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;
use kernel::id::AccountId;

/// Delete account use case
pub struct DeleteAccountUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
}

impl<A> DeleteAccountUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>) -> Self {
        Self { account_repo }
    }

    pub async fn execute(&self, account_id: &AccountId) -> AuthResult<()> {
        self.account_repo.delete(account_id).await?;

        tracing::info!(account_id = %account_id, "Account deleted");
        Ok(())
    }
}
