//! Session ID Value Object
//!
//! `Base64(SHA-256(token))`. A leaked session table cannot be replayed as
//! cookies because the token is not recoverable from its digest.

use serde::{Deserialize, Serialize};
use std::fmt;

use platform::crypto::{sha256, to_base64};

use super::session_token::SessionToken;

/// Length of the prefix used when a session id appears in logs
const LOG_PREFIX_LEN: usize = 8;

/// Primary key of a stored session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Derive the id from a raw token
    pub fn derive(token: &SessionToken) -> Self {
        Self(to_base64(&sha256(token.as_bytes())))
    }

    /// Rehydrate from a stored value
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short prefix for log fields
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(LOG_PREFIX_LEN)
            .map_or(self.0.len(), |(i, _)| i);
        &self.0[..end]
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_known_vector() {
        // SHA-256("hello") = 2cf24dba...9824
        let token = SessionToken::from_presented("hello");
        let digest =
            hex::decode("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824")
                .unwrap();

        assert_eq!(SessionId::derive(&token).as_str(), to_base64(&digest));
        assert_eq!(
            SessionId::derive(&token).as_str(),
            "LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ="
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let token = SessionToken::generate(20);
        assert_eq!(SessionId::derive(&token), SessionId::derive(&token));
        assert_ne!(SessionId::derive(&token).as_str(), token.expose());
    }

    #[test]
    fn test_short_prefix() {
        let id = SessionId::from_db("abcdefghijkl".to_string());
        assert_eq!(id.short(), "abcdefgh");

        let tiny = SessionId::from_db("abc".to_string());
        assert_eq!(tiny.short(), "abc");
    }
}
