use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{account::Role, email::Email, password::Password};

// MxResolver port trait and errors
#[derive(Debug, Error)]
pub enum MxResolveError {
    #[error("mail-exchange lookup timed out")]
    Timeout,
    #[error("mail-exchange lookup failed: {0}")]
    Lookup(String),
}

/// Port for the domain-deliverability heuristic.
///
/// `Ok(false)` covers the definitive negatives ("no answer", domain does
/// not exist). Timeouts and transport failures are errors so callers can
/// log them before treating the domain as undeliverable; they must never
/// propagate as fatal faults.
#[async_trait]
pub trait MxResolver: Send + Sync {
    /// True iff the domain publishes at least one mail-exchange record.
    async fn has_mx(&self, domain: &str) -> Result<bool, MxResolveError>;
}

// CredentialHasher port trait and errors
#[derive(Debug, Error)]
pub enum CredentialHasherError {
    #[error("Failed to hash password: {0}")]
    Hash(String),
    #[error("Stored credential hash is malformed: {0}")]
    MalformedHash(String),
}

/// Port for the salted one-way password hash.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext password with a fresh random salt, producing a
    /// self-describing hash string.
    fn hash(&self, password: &Password) -> Result<String, CredentialHasherError>;

    /// Verify a plaintext password against a stored hash. A mismatch is
    /// `Ok(false)`, not an error.
    fn verify(&self, password: &Password, credential_hash: &str)
    -> Result<bool, CredentialHasherError>;
}

// TokenService port trait, claims and errors
/// Payload of a session token. Fields are tamper-evident, not secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// The account's email address.
    pub sub: String,
    pub role: Role,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("token is malformed or its signature does not verify")]
    Malformed,
    #[error("token has expired")]
    Expired,
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Port for issuing and verifying signed, time-bounded session tokens.
///
/// Tokens are never revoked server-side; expiry is the only termination
/// mechanism. That is an accepted limitation of the design, not something
/// an implementation should quietly extend.
pub trait TokenService: Send + Sync {
    fn issue(&self, email: &Email, role: Role) -> Result<String, TokenError>;
    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}
