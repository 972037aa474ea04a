use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// Registration policy: shorter passwords are rejected with a specific
/// message. Login accepts any non-empty password so accounts created under
/// an older policy can still authenticate.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("password is required")]
    Missing,
}

/// A plaintext password in transit.
///
/// Wrapped in [`Secret`] so it is never printed by `Debug` output or
/// captured in tracing spans. The plaintext only ever flows into the
/// credential hasher.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Character count of the plaintext, for the registration length policy.
    pub fn len(&self) -> usize {
        self.0.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(PasswordError::Missing);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_password() {
        let result = Password::try_from(Secret::from(String::new()));
        assert_eq!(result.unwrap_err(), PasswordError::Missing);
    }

    #[test]
    fn accepts_any_non_empty_password() {
        // Length policy is enforced at registration, not at parse time.
        let password = Password::try_from(Secret::from("abc".to_string())).unwrap();
        assert_eq!(password.len(), 3);
    }

    #[test]
    fn debug_output_does_not_leak_the_plaintext() {
        let password = Password::try_from(Secret::from("hunter2".to_string())).unwrap();
        let rendered = format!("{password:?}");
        assert!(!rendered.contains("hunter2"));
    }
}
