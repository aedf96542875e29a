//! Unit tests for the auth use cases, run against in-memory fakes of the
//! account directory and the real in-memory session store.

mod support {
    use std::sync::{Arc, Mutex};

    use crate::application::config::AuthConfig;
    use crate::domain::entity::account::Account;
    use crate::domain::entity::role_record::{FacultyRecord, StudentRecord};
    use crate::domain::repository::{AccountRepository, RoleRecordRepository};
    use crate::domain::value_object::{account_password::AccountPassword, email::Email};
    use crate::error::AuthResult;
    use crate::domain::entity::account::Preferences;
    use kernel::id::AccountId;

    /// In-memory fake of the account directory (both halves)
    #[derive(Clone, Default)]
    pub struct FakeDirectory {
        pub accounts: Arc<Mutex<Vec<Account>>>,
        pub students: Arc<Mutex<Vec<StudentRecord>>>,
        pub faculty: Arc<Mutex<Vec<FacultyRecord>>>,
    }

    impl FakeDirectory {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn stored_account(&self, email: &str) -> Option<Account> {
            self.accounts
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.email.as_str() == email)
                .cloned()
        }

        pub fn set_preferences(&self, account_id: &AccountId, preferences: Preferences) {
            let mut accounts = self.accounts.lock().unwrap();
            let account = accounts
                .iter_mut()
                .find(|a| &a.account_id == account_id)
                .expect("account exists");
            account.preferences = preferences;
        }
    }

    impl AccountRepository for FakeDirectory {
        async fn insert(&self, account: &Account) -> AuthResult<AccountId> {
            self.accounts.lock().unwrap().push(account.clone());
            Ok(account.account_id)
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.email.as_str() == email.as_str())
                .cloned())
        }

        async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .iter()
                .find(|a| &a.account_id == account_id)
                .cloned())
        }

        async fn update_first_name(
            &self,
            account_id: &AccountId,
            first_name: &str,
        ) -> AuthResult<()> {
            let mut accounts = self.accounts.lock().unwrap();
            if let Some(account) = accounts.iter_mut().find(|a| &a.account_id == account_id) {
                account.first_name = first_name.to_string();
            }
            Ok(())
        }

        async fn update_last_name(
            &self,
            account_id: &AccountId,
            last_name: &str,
        ) -> AuthResult<()> {
            let mut accounts = self.accounts.lock().unwrap();
            if let Some(account) = accounts.iter_mut().find(|a| &a.account_id == account_id) {
                account.last_name = last_name.to_string();
            }
            Ok(())
        }

        async fn update_password(
            &self,
            account_id: &AccountId,
            password_hash: &AccountPassword,
        ) -> AuthResult<()> {
            let mut accounts = self.accounts.lock().unwrap();
            if let Some(account) = accounts.iter_mut().find(|a| &a.account_id == account_id) {
                account.password_hash = password_hash.clone();
            }
            Ok(())
        }

        async fn update_preferences(
            &self,
            account_id: &AccountId,
            preferences: &Preferences,
        ) -> AuthResult<()> {
            let mut accounts = self.accounts.lock().unwrap();
            if let Some(account) = accounts.iter_mut().find(|a| &a.account_id == account_id) {
                account.preferences = preferences.clone();
            }
            Ok(())
        }

        async fn delete(&self, account_id: &AccountId) -> AuthResult<()> {
            self.accounts
                .lock()
                .unwrap()
                .retain(|a| &a.account_id != account_id);
            Ok(())
        }
    }

    impl RoleRecordRepository for FakeDirectory {
        async fn insert_student(&self, student: &StudentRecord) -> AuthResult<()> {
            self.students.lock().unwrap().push(student.clone());
            Ok(())
        }

        async fn insert_faculty(&self, faculty: &FacultyRecord) -> AuthResult<()> {
            self.faculty.lock().unwrap().push(faculty.clone());
            Ok(())
        }

        async fn find_student_by_account(
            &self,
            account_id: &AccountId,
        ) -> AuthResult<Option<StudentRecord>> {
            Ok(self
                .students
                .lock()
                .unwrap()
                .iter()
                .find(|s| &s.account_id == account_id)
                .cloned())
        }

        async fn find_faculty_by_account(
            &self,
            account_id: &AccountId,
        ) -> AuthResult<Option<FacultyRecord>> {
            Ok(self
                .faculty
                .lock()
                .unwrap()
                .iter()
                .find(|f| &f.account_id == account_id)
                .cloned())
        }
    }

    pub fn test_config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::testing())
    }
}

mod sign_up_tests {
    use std::sync::Arc;

    use super::support::{FakeDirectory, test_config};
    use crate::application::{SignUpInput, SignUpUseCase};
    use crate::error::AuthError;

    fn input(email: &str, password: &str) -> SignUpInput {
        SignUpInput {
            email: email.to_string(),
            password: password.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[tokio::test]
    async fn student_signup_persists_account_and_role_record() {
        let directory = Arc::new(FakeDirectory::new());
        let use_case = SignUpUseCase::new(directory.clone(), directory.clone(), test_config());

        let output = use_case
            .execute_student(input("a@b.com", "Abcdef12"))
            .await
            .unwrap();

        assert!(!output.account_id.as_uuid().is_nil());

        let stored = directory.stored_account("a@b.com").unwrap();
        assert_ne!(stored.password_hash.as_str(), "Abcdef12");
        assert!(stored.password_hash.as_str().starts_with("$2"));

        let students = directory.students.lock().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].account_id, output.account_id);
    }

    #[tokio::test]
    async fn faculty_signup_persists_faculty_record() {
        let directory = Arc::new(FakeDirectory::new());
        let use_case = SignUpUseCase::new(directory.clone(), directory.clone(), test_config());

        let output = use_case
            .execute_faculty(input("prof@uni.edu", "Abcdef12"))
            .await
            .unwrap();

        assert!(directory.students.lock().unwrap().is_empty());

        let faculty = directory.faculty.lock().unwrap();
        assert_eq!(faculty.len(), 1);
        assert_eq!(faculty[0].account_id, output.account_id);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let directory = Arc::new(FakeDirectory::new());
        let use_case = SignUpUseCase::new(directory.clone(), directory.clone(), test_config());

        use_case
            .execute_student(input("a@b.com", "Abcdef12"))
            .await
            .unwrap();

        let err = use_case
            .execute_student(input("a@b.com", "Abcdef12"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailExists));
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let directory = Arc::new(FakeDirectory::new());
        let use_case = SignUpUseCase::new(directory.clone(), directory.clone(), test_config());

        let err = use_case
            .execute_student(input("not-an-email", "Abcdef12"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmailFormat));
    }

    #[tokio::test]
    async fn weak_password_is_rejected() {
        let directory = Arc::new(FakeDirectory::new());
        let use_case = SignUpUseCase::new(directory.clone(), directory.clone(), test_config());

        let err = use_case
            .execute_student(input("a@b.com", "lowercase1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidPasswordFormat));

        // Nothing was written before the rejection.
        assert!(directory.accounts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn signup_seeds_default_preferences() {
        let directory = Arc::new(FakeDirectory::new());
        let use_case = SignUpUseCase::new(directory.clone(), directory.clone(), test_config());

        use_case
            .execute_student(input("a@b.com", "Abcdef12"))
            .await
            .unwrap();

        let stored = directory.stored_account("a@b.com").unwrap();
        assert_eq!(stored.preferences.ui_theme, "light");
        assert_eq!(stored.preferences.editor_theme, "monokai");
        assert!(stored.preferences.wants_email_notifications);
    }
}

mod sign_in_tests {
    use std::mem::discriminant;
    use std::sync::Arc;

    use super::support::{FakeDirectory, test_config};
    use crate::application::{
        CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase,
    };
    use crate::error::AuthError;
    use crate::infra::memory::InMemorySessionStore;

    async fn signed_up_directory(email: &str, password: &str, student: bool) -> Arc<FakeDirectory> {
        let directory = Arc::new(FakeDirectory::new());
        let use_case = SignUpUseCase::new(directory.clone(), directory.clone(), test_config());
        let input = SignUpInput {
            email: email.to_string(),
            password: password.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        if student {
            use_case.execute_student(input).await.unwrap();
        } else {
            use_case.execute_faculty(input).await.unwrap();
        }
        directory
    }

    fn credentials(email: &str, password: &str) -> SignInInput {
        SignInInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn login_returns_profile_and_session_token() {
        let directory = signed_up_directory("a@b.com", "Abcdef12", true).await;
        let sessions = Arc::new(InMemorySessionStore::new());
        let use_case = SignInUseCase::new(directory.clone(), directory.clone(), sessions.clone());

        let output = use_case
            .execute(credentials("a@b.com", "Abcdef12"))
            .await
            .unwrap();

        assert_eq!(output.first_name, "Ada");
        assert_eq!(output.last_name, "Lovelace");
        assert!(output.is_student);
        assert_eq!(output.ui_theme, "light");
        assert_eq!(output.editor_theme, "monokai");
        assert!(output.wants_email_notifications);
        assert!(!output.session_token.is_empty());
    }

    #[tokio::test]
    async fn login_session_resolves_to_student_record() {
        let directory = signed_up_directory("a@b.com", "Abcdef12", true).await;
        let sessions = Arc::new(InMemorySessionStore::new());
        let sign_in = SignInUseCase::new(directory.clone(), directory.clone(), sessions.clone());

        let output = sign_in
            .execute(credentials("a@b.com", "Abcdef12"))
            .await
            .unwrap();

        let check = CheckSessionUseCase::new(sessions.clone());
        let info = check.execute(&output.session_token).await.unwrap().unwrap();

        let expected = directory.students.lock().unwrap()[0].clone();
        assert!(info.is_student);
        assert_eq!(info.student_id, Some(expected.student_id));
        assert_eq!(info.faculty_id, None);
        assert_eq!(info.account_id, expected.account_id);
    }

    #[tokio::test]
    async fn faculty_login_sets_faculty_id() {
        let directory = signed_up_directory("prof@uni.edu", "Abcdef12", false).await;
        let sessions = Arc::new(InMemorySessionStore::new());
        let sign_in = SignInUseCase::new(directory.clone(), directory.clone(), sessions.clone());

        let output = sign_in
            .execute(credentials("prof@uni.edu", "Abcdef12"))
            .await
            .unwrap();
        assert!(!output.is_student);

        let check = CheckSessionUseCase::new(sessions.clone());
        let info = check.execute(&output.session_token).await.unwrap().unwrap();
        assert!(!info.is_student);
        assert!(info.faculty_id.is_some());
        assert!(info.student_id.is_none());
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_yield_the_same_error() {
        let directory = signed_up_directory("a@b.com", "Abcdef12", true).await;
        let sessions = Arc::new(InMemorySessionStore::new());
        let use_case = SignInUseCase::new(directory.clone(), directory.clone(), sessions);

        let unknown = use_case
            .execute(credentials("nobody@b.com", "Abcdef12"))
            .await
            .unwrap_err();
        let wrong = use_case
            .execute(credentials("a@b.com", "Wrong1234"))
            .await
            .unwrap_err();

        assert!(matches!(unknown, AuthError::InvalidEmailPassword));
        assert_eq!(discriminant(&unknown), discriminant(&wrong));
    }

    #[tokio::test]
    async fn account_without_role_record_is_an_integrity_fault() {
        let directory = Arc::new(FakeDirectory::new());

        // Insert the account by hand, skipping the role-record write.
        use crate::domain::entity::account::Account;
        use crate::domain::repository::AccountRepository;
        use crate::domain::value_object::{
            account_password::{AccountPassword, RawPassword},
            email::Email,
        };

        let raw = RawPassword::new("Abcdef12".to_string()).unwrap();
        let account = Account::new(
            Email::new("orphan@b.com").unwrap(),
            AccountPassword::from_raw(&raw, 4).unwrap(),
            "Or".to_string(),
            "Phan".to_string(),
        );
        directory.insert(&account).await.unwrap();

        let sessions = Arc::new(InMemorySessionStore::new());
        let use_case = SignInUseCase::new(directory.clone(), directory.clone(), sessions);

        let err = use_case
            .execute(credentials("orphan@b.com", "Abcdef12"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[tokio::test]
    async fn logout_revokes_the_session_and_is_idempotent() {
        let directory = signed_up_directory("a@b.com", "Abcdef12", true).await;
        let sessions = Arc::new(InMemorySessionStore::new());
        let sign_in = SignInUseCase::new(directory.clone(), directory.clone(), sessions.clone());

        let token = sign_in
            .execute(credentials("a@b.com", "Abcdef12"))
            .await
            .unwrap()
            .session_token;

        let check = CheckSessionUseCase::new(sessions.clone());
        assert!(check.execute(&token).await.unwrap().is_some());

        let sign_out = SignOutUseCase::new(sessions.clone());
        sign_out.execute(&token).await.unwrap();
        assert!(check.execute(&token).await.unwrap().is_none());

        // Second sign-out of the same token is not an error.
        sign_out.execute(&token).await.unwrap();
    }
}

mod session_tests {
    use std::sync::Arc;

    use crate::application::CheckSessionUseCase;
    use crate::domain::repository::SessionStore;
    use crate::error::AuthError;
    use crate::infra::memory::InMemorySessionStore;

    #[tokio::test]
    async fn missing_token_resolves_to_none() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let check = CheckSessionUseCase::new(sessions);

        assert!(check.execute("no-such-token").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_payload_is_an_infrastructure_error_not_absent() {
        let sessions = Arc::new(InMemorySessionStore::new());
        sessions.set("token", "{not json").await.unwrap();

        let check = CheckSessionUseCase::new(sessions);
        let err = check.execute("token").await.unwrap_err();
        assert!(matches!(err, AuthError::Serialization(_)));
    }
}

mod update_profile_tests {
    use std::sync::Arc;

    use super::support::{FakeDirectory, test_config};
    use crate::application::{
        SignUpInput, SignUpUseCase, UpdateProfileUseCase, update_profile::ProfileUpdateInput,
    };
    use crate::domain::entity::account::{Preferences, PreferencesPatch};
    use crate::domain::value_object::account_password::RawPassword;
    use crate::error::AuthError;
    use kernel::id::AccountId;

    async fn directory_with_account() -> (Arc<FakeDirectory>, AccountId) {
        let directory = Arc::new(FakeDirectory::new());
        let use_case = SignUpUseCase::new(directory.clone(), directory.clone(), test_config());
        let output = use_case
            .execute_student(SignUpInput {
                email: "a@b.com".to_string(),
                password: "Abcdef12".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            })
            .await
            .unwrap();
        (directory, output.account_id)
    }

    #[tokio::test]
    async fn patch_applies_only_present_fields() {
        let (directory, account_id) = directory_with_account().await;
        let use_case = UpdateProfileUseCase::new(directory.clone(), test_config());

        use_case
            .execute(
                &account_id,
                ProfileUpdateInput {
                    first_name: Some("Grace".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = directory.stored_account("a@b.com").unwrap();
        assert_eq!(stored.first_name, "Grace");
        assert_eq!(stored.last_name, "Lovelace");
    }

    #[tokio::test]
    async fn password_pair_requires_both_halves() {
        let (directory, account_id) = directory_with_account().await;
        let use_case = UpdateProfileUseCase::new(directory.clone(), test_config());

        // Only the new half present: the pair is skipped, not an error.
        use_case
            .execute(
                &account_id,
                ProfileUpdateInput {
                    new_password: Some("Changed123".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = directory.stored_account("a@b.com").unwrap();
        let original = RawPassword::unchecked("Abcdef12".to_string());
        assert!(stored.password_hash.verify(&original).unwrap());
    }

    #[tokio::test]
    async fn password_change_verifies_the_old_password() {
        let (directory, account_id) = directory_with_account().await;
        let use_case = UpdateProfileUseCase::new(directory.clone(), test_config());

        let err = use_case
            .update_password(
                &account_id,
                "WrongOld12".to_string(),
                "Changed123".to_string(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UpdateFieldRejected));

        use_case
            .update_password(&account_id, "Abcdef12".to_string(), "Changed123".to_string())
            .await
            .unwrap();

        let stored = directory.stored_account("a@b.com").unwrap();
        let new = RawPassword::unchecked("Changed123".to_string());
        assert!(stored.password_hash.verify(&new).unwrap());
    }

    #[tokio::test]
    async fn password_change_rejects_unknown_account() {
        let (directory, _) = directory_with_account().await;
        let use_case = UpdateProfileUseCase::new(directory, test_config());

        let err = use_case
            .update_password(
                &AccountId::new(),
                "Abcdef12".to_string(),
                "Changed123".to_string(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UpdateFieldRejected));
    }

    #[tokio::test]
    async fn password_change_enforces_policy_on_the_new_password() {
        let (directory, account_id) = directory_with_account().await;
        let use_case = UpdateProfileUseCase::new(directory, test_config());

        let err = use_case
            .update_password(&account_id, "Abcdef12".to_string(), "weak".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidPasswordFormat));
    }

    #[tokio::test]
    async fn preferences_patch_merges_onto_current_values() {
        let (directory, account_id) = directory_with_account().await;

        directory.set_preferences(
            &account_id,
            Preferences {
                ui_theme: "dark".to_string(),
                editor_theme: "vim".to_string(),
                wants_email_notifications: false,
            },
        );

        let use_case = UpdateProfileUseCase::new(directory.clone(), test_config());
        use_case
            .update_preferences(
                &account_id,
                PreferencesPatch {
                    ui_theme: Some("light".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = directory.stored_account("a@b.com").unwrap();
        assert_eq!(stored.preferences.ui_theme, "light");
        assert_eq!(stored.preferences.editor_theme, "vim");
        assert!(!stored.preferences.wants_email_notifications);
    }
}

mod delete_account_tests {
    use std::sync::Arc;

    use super::support::{FakeDirectory, test_config};
    use crate::application::{DeleteAccountUseCase, SignUpInput, SignUpUseCase};

    #[tokio::test]
    async fn delete_forwards_to_the_directory() {
        let directory = Arc::new(FakeDirectory::new());
        let sign_up = SignUpUseCase::new(directory.clone(), directory.clone(), test_config());
        let output = sign_up
            .execute_student(SignUpInput {
                email: "a@b.com".to_string(),
                password: "Abcdef12".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            })
            .await
            .unwrap();

        let use_case = DeleteAccountUseCase::new(directory.clone());
        use_case.execute(&output.account_id).await.unwrap();

        assert!(directory.stored_account("a@b.com").is_none());
    }
}
