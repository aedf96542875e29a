//! Application Configuration
//!
//! Configuration for the Auth application layer.

use platform::password::HASH_COST;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// bcrypt work factor for credential hashing
    pub hash_cost: u32,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session_token".to_string(),
            hash_cost: HASH_COST,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Create config for tests (minimum bcrypt cost)
    ///
    /// bcrypt's floor is cost 4; production stays at [`HASH_COST`].
    pub fn testing() -> Self {
        Self {
            hash_cost: 4,
            cookie_secure: false,
            ..Default::default()
        }
    }
}
