use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{account::Account, email::Email};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists) => true,
            (Self::AccountNotFound, Self::AccountNotFound) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Port to the persistent account record store, keyed by email.
///
/// The counter operations must be atomic at the store level: two concurrent
/// failed logins for the same account must both be counted, or the lockout
/// guarantee weakens.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError>;
    async fn insert(&self, account: Account) -> Result<(), AccountStoreError>;
    async fn increment_failed_attempts(&self, email: &Email) -> Result<(), AccountStoreError>;
    async fn reset_failed_attempts(&self, email: &Email) -> Result<(), AccountStoreError>;
}
