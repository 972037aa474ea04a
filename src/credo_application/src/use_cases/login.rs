use credo_core::{
    AccountStore, AccountStoreError, CredentialHasher, CredentialHasherError, Email, Password,
    TokenError, TokenService,
};

/// Error types specific to the login use case.
///
/// `InvalidCredentials` covers both "no such account" and "wrong password";
/// the caller-visible message must not reveal which.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("account locked after too many failed attempts")]
    AccountLocked,
    #[error("Account store error: {0}")]
    Store(#[from] AccountStoreError),
    #[error("{0}")]
    Hasher(#[from] CredentialHasherError),
    #[error("{0}")]
    Token(#[from] TokenError),
}

/// Login use case - verifies credentials and issues a session token.
///
/// Drives the attempt-counter state machine: `Active(n)` for n in [0,5),
/// `Locked` at or above 5. A failed verification increments the counter, a
/// successful one resets it to zero, and `Locked` has no automatic outgoing
/// transition.
pub struct LoginUseCase<'a, S, H, T>
where
    S: AccountStore,
    H: CredentialHasher,
    T: TokenService,
{
    account_store: &'a S,
    hasher: &'a H,
    token_service: &'a T,
}

impl<'a, S, H, T> LoginUseCase<'a, S, H, T>
where
    S: AccountStore,
    H: CredentialHasher,
    T: TokenService,
{
    pub fn new(account_store: &'a S, hasher: &'a H, token_service: &'a T) -> Self {
        Self {
            account_store,
            hasher,
            token_service,
        }
    }

    /// Execute the login use case, returning a signed session token.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<String, LoginError> {
        let Some(account) = self.account_store.find_by_email(&email).await? else {
            return Err(LoginError::InvalidCredentials);
        };

        // The lockout check comes before password verification so a locked
        // account rejects even the correct password.
        if account.is_locked() {
            tracing::info!("login rejected: account locked");
            return Err(LoginError::AccountLocked);
        }

        if !self.hasher.verify(&password, account.credential_hash())? {
            self.account_store.increment_failed_attempts(&email).await?;
            return Err(LoginError::InvalidCredentials);
        }

        if account.failed_attempts() > 0 {
            self.account_store.reset_failed_attempts(&email).await?;
        }

        let token = self.token_service.issue(&email, account.role())?;
        Ok(token)
    }
}
