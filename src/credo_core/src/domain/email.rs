use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural grammar for email addresses.
///
/// Lower-case ASCII local part with the usual symbol set, dot-separated
/// domain labels with at least one dot, and no leading or trailing hyphen
/// inside a label. Anything outside this grammar is rejected up front,
/// before any blocklist or DNS gate runs.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$",
    )
    .expect("email pattern is a valid regex")
});

#[derive(Debug, Error, PartialEq)]
pub enum EmailError {
    #[error("email is required")]
    Missing,
    #[error("invalid email structure")]
    InvalidStructure,
}

/// A structurally valid email address.
///
/// Construction is the only way to obtain an `Email`, so every instance
/// reaching the stores or the token service has already passed the grammar
/// check. Addresses are case-sensitive keys; the grammar only admits
/// lower-case, so no normalization pass is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The domain part, everything after the last `@`.
    pub fn domain(&self) -> &str {
        self.0
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or("")
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(EmailError::Missing);
        }
        if !EMAIL_PATTERN.is_match(&value) {
            return Err(EmailError::InvalidStructure);
        }
        Ok(Self(value))
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn accepts_plain_addresses() {
        for valid in [
            "a@example.com",
            "user.name@example.com",
            "user+tag@mail.example.co",
            "x@sub.domain-with-hyphen.org",
        ] {
            assert!(
                Email::try_from(valid.to_string()).is_ok(),
                "expected {valid} to parse"
            );
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for invalid in [
            "",
            "a@@bad",
            "no-at-sign",
            "missing-domain-dot@example",
            "Upper@example.com",
            "user@-leadinghyphen.com",
            "user@trailinghyphen-.com",
            "user@example..com",
            "user@.example.com",
            "spaces in@example.com",
        ] {
            assert!(
                Email::try_from(invalid.to_string()).is_err(),
                "expected {invalid:?} to be rejected"
            );
        }
    }

    #[test]
    fn empty_input_is_reported_as_missing() {
        assert_eq!(Email::try_from(String::new()), Err(EmailError::Missing));
        assert_eq!(
            Email::try_from("not an email".to_string()),
            Err(EmailError::InvalidStructure)
        );
    }

    #[test]
    fn domain_is_everything_after_the_last_at() {
        let email = Email::try_from("user@mail.example.com".to_string()).unwrap();
        assert_eq!(email.domain(), "mail.example.com");
    }

    #[quickcheck]
    fn parsed_emails_always_contain_an_at_and_a_domain_dot(local: String, domain: String) -> bool {
        // Whatever the inputs, a successful parse implies the invariants hold.
        let candidate = format!("{local}@{domain}");
        match Email::try_from(candidate) {
            Ok(email) => email.as_str().contains('@') && email.domain().contains('.'),
            Err(_) => true,
        }
    }
}
