//! Account Password Value Object
//!
//! Domain wrapper for account credentials. Delegates policy enforcement
//! and bcrypt hashing to `platform::password`.

use std::fmt;

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password, enforcing the account policy
    ///
    /// Used at signup and password change; see
    /// [`platform::password::check_policy`] for the exact rule.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        Ok(Self(ClearTextPassword::new(raw)?))
    }

    /// Create without policy validation
    ///
    /// For credentials that are only verified against an existing hash
    /// (login, old-password checks).
    pub fn unchecked(raw: String) -> Self {
        Self(ClearTextPassword::unchecked(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Account Password (Hashed, for storage)
// ============================================================================

/// Hashed account password for database storage
#[derive(Clone, PartialEq, Eq)]
pub struct AccountPassword(HashedPassword);

impl AccountPassword {
    /// Create from a raw password by hashing
    ///
    /// ## Arguments
    /// * `raw` - The validated raw password
    /// * `cost` - bcrypt work factor
    pub fn from_raw(raw: &RawPassword, cost: u32) -> Result<Self, PasswordHashError> {
        Ok(Self(raw.inner().hash(cost)?))
    }

    /// Create from a stored hash string (from database)
    pub fn from_hash_string(hash: impl Into<String>) -> Self {
        Self(HashedPassword::from_hash_string(hash))
    }

    /// Get the hash string for database storage
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword) -> Result<bool, PasswordHashError> {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for AccountPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_password_policy() {
        assert!(RawPassword::new("Abcdef12".to_string()).is_ok());
        assert!(RawPassword::new("short1A".to_string()).is_err());
        assert!(RawPassword::new("nouppercase1".to_string()).is_err());
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("TestPassword123".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw, 4).unwrap();

        assert!(hashed.verify(&raw).unwrap());

        let wrong = RawPassword::unchecked("WrongPassword123".to_string());
        assert!(!hashed.verify(&wrong).unwrap());
    }

    #[test]
    fn test_hash_string_roundtrip() {
        let raw = RawPassword::new("TestPassword123".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw, 4).unwrap();

        let restored = AccountPassword::from_hash_string(hashed.as_str());
        assert!(restored.verify(&raw).unwrap());
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword1".to_string()).unwrap();
        assert!(!format!("{:?}", raw).contains("Secret"));

        let hashed = AccountPassword::from_raw(&raw, 4).unwrap();
        assert!(format!("{:?}", hashed).contains("HASH"));
    }
}
