//! Hand-rolled port mocks shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

use credo_core::{
    Account, AccountStore, AccountStoreError, Claims, CredentialHasher, CredentialHasherError,
    Email, MxResolveError, MxResolver, Password, Role, TokenError, TokenService,
};

pub fn email(address: &str) -> Email {
    Email::try_from(address.to_string()).unwrap()
}

pub fn password(plaintext: &str) -> Password {
    Password::try_from(Secret::from(plaintext.to_string())).unwrap()
}

/// In-memory account store mirroring the adapter contract.
#[derive(Clone, Default)]
pub struct MockAccountStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
}

impl MockAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AccountStore for MockAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn insert(&self, account: Account) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.email()) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        accounts.insert(account.email().clone(), account);
        Ok(())
    }

    async fn increment_failed_attempts(&self, email: &Email) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(email)
            .ok_or(AccountStoreError::AccountNotFound)?;
        account.record_failed_attempt();
        Ok(())
    }

    async fn reset_failed_attempts(&self, email: &Email) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(email)
            .ok_or(AccountStoreError::AccountNotFound)?;
        account.clear_failed_attempts();
        Ok(())
    }
}

/// Stores and compares plaintext; the tests exercise the pipeline, not argon2.
pub struct PlainTextHasher;

impl CredentialHasher for PlainTextHasher {
    fn hash(&self, password: &Password) -> Result<String, CredentialHasherError> {
        Ok(password.as_ref().expose_secret().clone())
    }

    fn verify(
        &self,
        password: &Password,
        credential_hash: &str,
    ) -> Result<bool, CredentialHasherError> {
        Ok(password.as_ref().expose_secret() == credential_hash)
    }
}

/// Resolver with a canned answer.
pub enum MockMxResolver {
    Deliverable,
    Undeliverable,
    Failing,
}

impl MockMxResolver {
    pub fn always_deliverable() -> Self {
        Self::Deliverable
    }

    pub fn never_deliverable() -> Self {
        Self::Undeliverable
    }

    pub fn failing() -> Self {
        Self::Failing
    }
}

#[async_trait::async_trait]
impl MxResolver for MockMxResolver {
    async fn has_mx(&self, _domain: &str) -> Result<bool, MxResolveError> {
        match self {
            Self::Deliverable => Ok(true),
            Self::Undeliverable => Ok(false),
            Self::Failing => Err(MxResolveError::Timeout),
        }
    }
}

/// Issues a fixed, unsigned placeholder token.
pub struct MockTokenService;

impl TokenService for MockTokenService {
    fn issue(&self, email: &Email, role: Role) -> Result<String, TokenError> {
        Ok(format!("token-for-{}-as-{}", email, role.as_str()))
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let email = token
            .strip_prefix("token-for-")
            .and_then(|rest| rest.strip_suffix("-as-user"))
            .ok_or(TokenError::Malformed)?;
        Ok(Claims {
            sub: email.to_string(),
            role: Role::User,
            iat: 0,
            exp: i64::MAX,
        })
    }
}
