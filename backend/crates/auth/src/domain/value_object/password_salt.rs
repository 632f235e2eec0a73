//! Password Salt Value Object
//!
//! Per-password numeric salt mixed into the hashing input in decimal form.
//! Stored as `BIGINT` because Postgres has no unsigned 32-bit column type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordSalt(u32);

impl PasswordSalt {
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Column representation
    #[inline]
    pub fn to_i64(&self) -> i64 {
        i64::from(self.0)
    }

    /// Read back a column value, rejecting anything outside `u32`
    pub fn try_from_i64(value: i64) -> AuthResult<Self> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| AuthError::Internal(format!("Stored salt out of range: {}", value)))
    }
}

impl fmt::Display for PasswordSalt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for salts that are not the canonical decimal form of a `u32`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSalt;

impl fmt::Display for InvalidSalt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("salt is not a canonical decimal u32")
    }
}

impl std::error::Error for InvalidSalt {}

impl FromStr for PasswordSalt {
    type Err = InvalidSalt;

    /// Only the exact text `Display` produces is accepted, so the
    /// hashing input for a parsed salt is byte-identical to the stored one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.parse().map_err(|_| InvalidSalt)?;
        if value.to_string() != s {
            return Err(InvalidSalt);
        }
        Ok(Self(value))
    }
}
