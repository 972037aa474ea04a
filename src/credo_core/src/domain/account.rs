use serde::{Deserialize, Serialize};

use super::email::Email;

/// Failed-login threshold. An account at or above this count is locked
/// until an operator resets it; there is no automatic unlock timer.
pub const MAX_FAILED_ATTEMPTS: u32 = 5;

/// The only role the service issues. Roles are never derived from caller
/// input; every account is created as `User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
        }
    }
}

/// A persisted account record.
///
/// The plaintext password never lives here; only the salted one-way hash
/// produced by the credential hasher is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    email: Email,
    credential_hash: String,
    role: Role,
    failed_attempts: u32,
}

impl Account {
    pub fn new(email: Email, credential_hash: String) -> Self {
        Self {
            email,
            credential_hash,
            role: Role::User,
            failed_attempts: 0,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn credential_hash(&self) -> &str {
        &self.credential_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Whether the lockout threshold has been reached. Locked accounts have
    /// no outgoing transition other than a manual counter reset.
    pub fn is_locked(&self) -> bool {
        self.failed_attempts >= MAX_FAILED_ATTEMPTS
    }

    pub fn record_failed_attempt(&mut self) {
        self.failed_attempts = self.failed_attempts.saturating_add(1);
    }

    pub fn clear_failed_attempts(&mut self) {
        self.failed_attempts = 0;
    }
}
