//! Session Token Value Object
//!
//! The raw bearer secret handed to the client. It exists only in memory and
//! in the client's cookie; the store sees its digest ([`SessionId`]).
//!
//! [`SessionId`]: super::session_id::SessionId

use std::fmt;

use platform::crypto::{random_bytes, to_base64_url};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Default token entropy: 20 bytes (160 bits)
pub const DEFAULT_TOKEN_BYTES: usize = 20;

/// Raw session token
///
/// ## Security
/// - Zeroized on drop
/// - Debug output is redacted
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SessionToken(String);

impl SessionToken {
    /// Draw a fresh token of `len` random bytes, URL-safe Base64 encoded
    ///
    /// Lengths below [`DEFAULT_TOKEN_BYTES`] are raised to it.
    pub fn generate(len: usize) -> Self {
        let bytes = Zeroizing::new(random_bytes(len.max(DEFAULT_TOKEN_BYTES)));
        Self(to_base64_url(&bytes))
    }

    /// Wrap a token presented by a client (e.g. read from a cookie)
    pub fn from_presented(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Token text, for handing to the client
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}
