//! Account Entity
//!
//! The base identity record shared by students and faculty.
//! The role-specific half lives in [`super::role_record`].

use kernel::id::AccountId;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{account_password::AccountPassword, email::Email};

/// Account entity
///
/// Holds the credentials and profile of one user. The password field
/// only ever carries a hash; plaintext is consumed during signup and
/// never stored here.
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier, assigned at creation
    pub account_id: AccountId,
    /// Email address (globally unique)
    pub email: Email,
    /// Hashed password
    pub password_hash: AccountPassword,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Display preferences
    pub preferences: Preferences,
}

impl Account {
    /// Create a new account with default preferences
    ///
    /// Signup always seeds the defaults regardless of what the caller
    /// supplied; preference edits go through the profile-update path.
    pub fn new(
        email: Email,
        password_hash: AccountPassword,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            account_id: AccountId::new(),
            email,
            password_hash,
            first_name,
            last_name,
            preferences: Preferences::default(),
        }
    }
}

/// Display preferences stored on every account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// UI color theme
    pub ui_theme: String,
    /// Code editor theme
    pub editor_theme: String,
    /// Whether the account wants email notifications
    pub wants_email_notifications: bool,
}

impl Default for Preferences {
    /// The defaults seeded at signup
    fn default() -> Self {
        Self {
            ui_theme: "light".to_string(),
            editor_theme: "monokai".to_string(),
            wants_email_notifications: true,
        }
    }
}

/// Sparse preferences patch
///
/// Absent fields keep the account's current value when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    pub ui_theme: Option<String>,
    pub editor_theme: Option<String>,
    pub wants_email_notifications: Option<bool>,
}

impl PreferencesPatch {
    /// Merge this patch onto the current preferences
    pub fn merged_onto(self, current: &Preferences) -> Preferences {
        Preferences {
            ui_theme: self.ui_theme.unwrap_or_else(|| current.ui_theme.clone()),
            editor_theme: self
                .editor_theme
                .unwrap_or_else(|| current.editor_theme.clone()),
            wants_email_notifications: self
                .wants_email_notifications
                .unwrap_or(current.wants_email_notifications),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert_eq!(prefs.ui_theme, "light");
        assert_eq!(prefs.editor_theme, "monokai");
        assert!(prefs.wants_email_notifications);
    }

    #[test]
    fn test_patch_merges_absent_fields_from_current() {
        let current = Preferences {
            ui_theme: "dark".to_string(),
            editor_theme: "vim".to_string(),
            wants_email_notifications: false,
        };

        let patch = PreferencesPatch {
            ui_theme: Some("light".to_string()),
            editor_theme: None,
            wants_email_notifications: None,
        };

        let merged = patch.merged_onto(&current);
        assert_eq!(merged.ui_theme, "light");
        assert_eq!(merged.editor_theme, "vim");
        assert!(!merged.wants_email_notifications);
    }

    #[test]
    fn test_empty_patch_keeps_current() {
        let current = Preferences::default();
        let merged = PreferencesPatch::default().merged_onto(&current);
        assert_eq!(merged, current);
    }
}
