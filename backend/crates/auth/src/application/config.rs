//! Application Configuration
//!
//! Session policy and cookie settings for the auth core.

use chrono::Duration;
use platform::cookie::CookieConfig;

use crate::domain::value_object::session_token::DEFAULT_TOKEN_BYTES;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Lifetime granted at creation and on each renewal (30 days)
    pub session_ttl: Duration,
    /// Renewal happens only while `now < created_at + renewal_window` (15 days)
    pub renewal_window: Duration,
    /// Random bytes per token; values below 20 are raised to 20
    pub token_bytes: usize,
    /// Session cookie name
    pub cookie_name: String,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::days(30),
            renewal_window: Duration::days(15),
            token_bytes: DEFAULT_TOKEN_BYTES,
            cookie_name: "session".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl SessionConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Cookie settings with an explicit `Max-Age`
    pub fn cookie_config(&self, max_age_secs: Option<i64>) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs,
        }
    }
}
