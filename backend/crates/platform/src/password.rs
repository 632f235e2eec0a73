//! Password Hashing and Verification
//!
//! Passwords are hashed with Argon2id after a per-password numeric salt has
//! been appended to them in decimal form. Argon2 adds its own random salt on
//! top, so the stored PHC string is randomized even for identical inputs.
//!
//! ## Security Features
//! - Memory-hard hashing with fixed parameters (no per-call cost downgrade)
//! - Zeroization of cleartext and of the salted hashing input
//! - Constant-time comparison inside the Argon2 verifier
//!
//! No password policy is enforced here; an empty password hashes like any other.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::crypto::random_u32;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// The Argon2 primitive failed (e.g. allocation of its memory blocks)
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored value is not a PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Hash with a freshly drawn numeric salt
    ///
    /// ## Returns
    /// The PHC-formatted hash together with the salt that was mixed in.
    /// Both must be stored; neither is usable without the other.
    pub fn hash(&self) -> Result<SaltedHash, PasswordHashError> {
        let salt = random_u32();
        let hash = self.hash_with_salt(salt)?;
        Ok(SaltedHash { hash, salt })
    }

    /// Hash with a caller-supplied numeric salt
    pub fn hash_with_salt(&self, salt: u32) -> Result<HashedPassword, PasswordHashError> {
        let input = self.salted_input(salt);
        let argon_salt = SaltString::generate(OsRng);

        let hash = argon2_instance()
            .hash_password(&input, &argon_salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }

    /// `password ++ decimal(salt)`, wiped when dropped
    fn salted_input(&self, salt: u32) -> Zeroizing<Vec<u8>> {
        let salt_digits = salt.to_string();
        let mut input = Vec::with_capacity(self.0.len() + salt_digits.len());
        input.extend_from_slice(self.0.as_bytes());
        input.extend_from_slice(salt_digits.as_bytes());
        Zeroizing::new(input)
    }
}

impl From<String> for ClearTextPassword {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Result of [`ClearTextPassword::hash`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltedHash {
    pub hash: HashedPassword,
    pub salt: u32,
}

/// Hashed password in PHC string format
///
/// The PHC string carries the algorithm, version, parameters and Argon2's
/// internal salt, so verification needs nothing beyond the numeric salt.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string, rejecting anything that does not parse
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password and its numeric salt against this hash
    ///
    /// Returns `false` for a wrong password, a wrong salt, or a hash that
    /// cannot be parsed. Argon2 compares in constant time.
    pub fn verify(&self, password: &ClearTextPassword, salt: u32) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let input = password.salted_input(salt);

        argon2_instance()
            .verify_password(&input, &parsed_hash)
            .is_ok()
    }

    /// Whether the hash was produced by something other than Argon2id
    pub fn needs_rehash(&self) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => parsed.algorithm != argon2::Algorithm::Argon2id.ident(),
            Err(_) => true,
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// OWASP baseline Argon2id: m=19456 (19 MiB), t=2, p=1.
fn argon2_instance() -> Argon2<'static> {
    Argon2::default()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("TestPassword123!");
        let salted = password.hash().unwrap();

        assert!(salted.hash.verify(&password, salted.salt));

        let wrong_password = ClearTextPassword::new("WrongPassword123!");
        assert!(!salted.hash.verify(&wrong_password, salted.salt));
    }

    #[test]
    fn test_wrong_salt_rejected() {
        let password = ClearTextPassword::new("TestPassword123!");
        let salted = password.hash().unwrap();

        assert!(!salted.hash.verify(&password, salted.salt.wrapping_add(1)));
    }

    #[test]
    fn test_same_password_hashes_differ() {
        let password = ClearTextPassword::new("same password");
        let first = password.hash().unwrap();
        let second = password.hash().unwrap();

        assert_ne!(first.salt, second.salt);
        assert_ne!(first.hash, second.hash);
        assert!(first.hash.verify(&password, first.salt));
        assert!(second.hash.verify(&password, second.salt));
    }

    #[test]
    fn test_fixed_salt_still_randomized() {
        // Argon2's own salt keeps two hashes apart even with an equal numeric salt
        let password = ClearTextPassword::new("pw");
        let a = password.hash_with_salt(42).unwrap();
        let b = password.hash_with_salt(42).unwrap();
        assert_ne!(a, b);
        assert!(a.verify(&password, 42));
        assert!(b.verify(&password, 42));
    }

    #[test]
    fn test_empty_password_is_hashable() {
        let password = ClearTextPassword::new("");
        let salted = password.hash().unwrap();
        assert!(salted.hash.verify(&password, salted.salt));
        assert!(!salted.hash.verify(&ClearTextPassword::new(" "), salted.salt));
    }

    #[test]
    fn test_salt_is_appended_in_decimal() {
        let password = ClearTextPassword::new("abc");
        assert_eq!(password.salted_input(0).as_slice(), b"abc0");
        assert_eq!(password.salted_input(4_294_967_295).as_slice(), b"abc4294967295");
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new("TestPassword123!");
        let salted = password.hash().unwrap();

        let phc_string = salted.hash.as_phc_string().to_string();
        assert!(phc_string.starts_with("$argon2id$"));

        let restored = HashedPassword::from_phc_string(phc_string).unwrap();
        assert!(restored.verify(&password, salted.salt));
        assert!(!restored.needs_rehash());
    }

    #[test]
    fn test_invalid_phc_string() {
        let result = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(matches!(result, Err(PasswordHashError::InvalidHashFormat)));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = password.hash().unwrap().hash;
        assert!(!format!("{:?}", hashed).contains("argon2"));
    }
}
