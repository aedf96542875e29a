//! Email Value Object
//!
//! Represents a syntactically valid email address.
//!
//! Validation follows the RFC 5322 address shape: a dot-atom or quoted
//! local part, and a domain of dot-separated labels or a bracketed
//! IPv4/domain literal. The grammar is encoded as a single anchored,
//! case-insensitive regular expression compiled once per process.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Address grammar: dot-atom or quoted local part, label or literal domain
const EMAIL_PATTERN: &str = r#"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Email validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid email format")]
pub struct InvalidEmail;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> Result<Self, InvalidEmail> {
        let email = email.into();

        if !Self::is_valid_format(&email) {
            return Err(InvalidEmail);
        }

        Ok(Self(email))
    }

    /// Whether a string matches the address grammar
    pub fn is_valid_format(email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("User@Example.COM").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("a@b.com").is_ok());
    }

    #[test]
    fn test_email_quoted_local_part() {
        assert!(Email::new(r#""john.doe"@example.com"#).is_ok());
        // An unescaped space is not quoted-string content.
        assert!(Email::new(r#""john doe"@example.com"#).is_err());
    }

    #[test]
    fn test_email_bracketed_ipv4_domain() {
        assert!(Email::new("user@[192.168.0.1]").is_ok());
        assert!(Email::new("user@[256.0.0.1]").is_err());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
    }

    #[test]
    fn test_email_match_is_anchored() {
        // A valid address embedded in junk must not pass.
        assert!(Email::new("garbage a@b.com").is_err());
        assert!(Email::new("a@b.com trailing").is_err());
    }
}
