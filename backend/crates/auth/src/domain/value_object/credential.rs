//! Password Credential
//!
//! The stored half of a password: the Argon2id PHC string and the numeric
//! salt that was appended to the password before hashing. The two are only
//! meaningful together and are replaced together.

use platform::password::{ClearTextPassword, HashedPassword};

use super::password_salt::PasswordSalt;
use crate::error::AuthResult;

/// Credential hash record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCredential {
    hashed_password: HashedPassword,
    salt: PasswordSalt,
}

impl PasswordCredential {
    /// Hash a password under a fresh salt
    ///
    /// Fails only if the hashing primitive itself fails.
    pub fn hash(password: &ClearTextPassword) -> AuthResult<Self> {
        let salted = password.hash()?;
        Ok(Self {
            hashed_password: salted.hash,
            salt: PasswordSalt::new(salted.salt),
        })
    }

    /// Rehydrate from stored columns
    pub fn from_stored(hashed_password: impl Into<String>, salt: PasswordSalt) -> AuthResult<Self> {
        let hashed_password = HashedPassword::from_phc_string(hashed_password)?;
        Ok(Self {
            hashed_password,
            salt,
        })
    }

    pub fn hashed_password(&self) -> &str {
        self.hashed_password.as_phc_string()
    }

    pub fn salt(&self) -> PasswordSalt {
        self.salt
    }

    /// Check a candidate password against this record
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        self.hashed_password.verify(password, self.salt.value())
    }

    /// True when the stored hash should be replaced on next successful login
    pub fn needs_rehash(&self) -> bool {
        self.hashed_password.needs_rehash()
    }
}

/// Verify against loosely typed stored values
///
/// A malformed hash or a salt that is not a canonical decimal `u32` yields
/// `false`, same as a wrong password.
pub fn verify(hashed_password: &str, password: &str, salt: &str) -> bool {
    let Ok(salt) = salt.parse::<PasswordSalt>() else {
        return false;
    };
    let Ok(hash) = HashedPassword::from_phc_string(hashed_password) else {
        return false;
    };

    hash.verify(&ClearTextPassword::new(password), salt.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;

    #[test]
    fn test_hash_then_verify() {
        let password = ClearTextPassword::new("correct horse");
        let credential = PasswordCredential::hash(&password).unwrap();

        assert!(credential.verify(&password));
        assert!(!credential.verify(&ClearTextPassword::new("Correct horse")));
        assert!(!credential.needs_rehash());
    }

    #[test]
    fn test_two_hashes_of_same_password_differ() {
        let password = ClearTextPassword::new("same");
        let a = PasswordCredential::hash(&password).unwrap();
        let b = PasswordCredential::hash(&password).unwrap();

        assert_ne!(a.hashed_password(), b.hashed_password());
        assert!(a.verify(&password));
        assert!(b.verify(&password));
    }

    #[test]
    fn test_string_verify() {
        let password = ClearTextPassword::new("pw");
        let credential = PasswordCredential::hash(&password).unwrap();
        let salt = credential.salt().to_string();

        assert!(verify(credential.hashed_password(), "pw", &salt));
        assert!(!verify(credential.hashed_password(), "pw2", &salt));
        assert!(!verify(credential.hashed_password(), "pw", "not-a-number"));
        assert!(!verify("garbage", "pw", &salt));
    }

    #[test]
    fn test_string_verify_wrong_salt() {
        let password = ClearTextPassword::new("pw");
        let credential = PasswordCredential::hash(&password).unwrap();
        let other = credential.salt().value().wrapping_add(1).to_string();

        assert!(!verify(credential.hashed_password(), "pw", &other));
    }

    #[test]
    fn test_from_stored() {
        let password = ClearTextPassword::new("pw");
        let credential = PasswordCredential::hash(&password).unwrap();

        let restored =
            PasswordCredential::from_stored(credential.hashed_password(), credential.salt())
                .unwrap();
        assert_eq!(restored, credential);
        assert!(restored.verify(&password));

        let broken = PasswordCredential::from_stored("nope", credential.salt());
        assert!(matches!(broken, Err(AuthError::Internal(_))));
    }
}
