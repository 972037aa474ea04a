use argon2::{
    Argon2, PasswordHash, PasswordVerifier,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;

use credo_core::{CredentialHasher, CredentialHasherError, Password};

/// Argon2id password hashing with a fresh random salt per hash.
///
/// Produces PHC-format hash strings, so the salt and parameters travel with
/// the hash and verification needs no extra state.
#[derive(Debug, Clone, Default)]
pub struct Argon2CredentialHasher;

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &Password) -> Result<String, CredentialHasherError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CredentialHasherError::Hash(e.to_string()))
    }

    fn verify(
        &self,
        password: &Password,
        credential_hash: &str,
    ) -> Result<bool, CredentialHasherError> {
        let parsed = PasswordHash::new(credential_hash)
            .map_err(|e| CredentialHasherError::MalformedHash(e.to_string()))?;

        match Argon2::default()
            .verify_password(password.as_ref().expose_secret().as_bytes(), &parsed)
        {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(CredentialHasherError::Hash(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    fn password(plaintext: &str) -> Password {
        Password::try_from(Secret::from(plaintext.to_string())).unwrap()
    }

    #[test]
    fn hash_then_verify_succeeds() {
        let hasher = Argon2CredentialHasher::new();
        let hash = hasher.hash(&password("secret1")).unwrap();
        assert!(hasher.verify(&password("secret1"), &hash).unwrap());
    }

    #[test]
    fn wrong_password_is_a_clean_mismatch() {
        let hasher = Argon2CredentialHasher::new();
        let hash = hasher.hash(&password("secret1")).unwrap();
        assert!(!hasher.verify(&password("secret2"), &hash).unwrap());
    }

    #[test]
    fn salts_are_randomized() {
        let hasher = Argon2CredentialHasher::new();
        let first = hasher.hash(&password("secret1")).unwrap();
        let second = hasher.hash(&password("secret1")).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn plaintext_never_appears_in_the_hash() {
        let hasher = Argon2CredentialHasher::new();
        let hash = hasher.hash(&password("secret1")).unwrap();
        assert!(!hash.contains("secret1"));
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn garbage_stored_hash_is_an_error_not_a_mismatch() {
        let hasher = Argon2CredentialHasher::new();
        let result = hasher.verify(&password("secret1"), "not-a-phc-string");
        assert!(matches!(
            result,
            Err(CredentialHasherError::MalformedHash(_))
        ));
    }
}
