use credo_core::{
    Account, AccountStore, AccountStoreError, Blocklist, CredentialHasher, CredentialHasherError,
    Email, MIN_PASSWORD_LEN, MxResolver, Password,
};

/// Error types specific to the register use case.
///
/// Disposable domains, undeliverable domains and already-registered emails
/// all collapse into `EmailRejected` so a probing client cannot tell them
/// apart. The password policy failure keeps its specific message; the
/// policy is not sensitive to disclose.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("invalid registration data")]
    EmailRejected,
    #[error("password must be at least {} characters long", MIN_PASSWORD_LEN)]
    PasswordTooShort,
    #[error("Failed to hash password: {0}")]
    Hasher(#[from] CredentialHasherError),
    #[error("Account store error: {0}")]
    Store(AccountStoreError),
}

/// Register use case - creates a new account.
///
/// The email gates run in increasing cost order: the structural check has
/// already happened when the [`Email`] was parsed, the blocklist lookup is
/// an in-memory set probe, and only then is the mail-exchange resolution
/// paid for.
pub struct RegisterUseCase<'a, S, M, H>
where
    S: AccountStore,
    M: MxResolver,
    H: CredentialHasher,
{
    account_store: &'a S,
    blocklist: &'a Blocklist,
    mx_resolver: &'a M,
    hasher: &'a H,
}

impl<'a, S, M, H> RegisterUseCase<'a, S, M, H>
where
    S: AccountStore,
    M: MxResolver,
    H: CredentialHasher,
{
    pub fn new(
        account_store: &'a S,
        blocklist: &'a Blocklist,
        mx_resolver: &'a M,
        hasher: &'a H,
    ) -> Self {
        Self {
            account_store,
            blocklist,
            mx_resolver,
            hasher,
        }
    }

    /// Execute the register use case.
    ///
    /// Registration does not authenticate: success carries no token.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<(), RegisterError> {
        if self.blocklist.is_disposable(&email) {
            tracing::info!("registration rejected: disposable domain");
            return Err(RegisterError::EmailRejected);
        }

        if !self.domain_is_deliverable(&email).await {
            return Err(RegisterError::EmailRejected);
        }

        let existing = self
            .account_store
            .find_by_email(&email)
            .await
            .map_err(RegisterError::Store)?;
        if existing.is_some() {
            tracing::info!("registration rejected: email already registered");
            return Err(RegisterError::EmailRejected);
        }

        if password.len() < MIN_PASSWORD_LEN {
            return Err(RegisterError::PasswordTooShort);
        }

        let credential_hash = self.hasher.hash(&password)?;
        let account = Account::new(email, credential_hash);

        match self.account_store.insert(account).await {
            Ok(()) => Ok(()),
            // Lost the race with a concurrent registration for the same
            // email; indistinguishable from the existence check above.
            Err(AccountStoreError::AccountAlreadyExists) => Err(RegisterError::EmailRejected),
            Err(e) => Err(RegisterError::Store(e)),
        }
    }

    /// Deliverability gate. Resolver failures (timeouts, transport errors)
    /// are logged for operators and treated as "not deliverable" - DNS
    /// flakiness must not crash the service or leak detail to the caller.
    async fn domain_is_deliverable(&self, email: &Email) -> bool {
        match self.mx_resolver.has_mx(email.domain()).await {
            Ok(true) => true,
            Ok(false) => {
                tracing::info!("registration rejected: domain has no mail-exchange records");
                false
            }
            Err(error) => {
                tracing::warn!(%error, "mail-exchange lookup failed, treating domain as undeliverable");
                false
            }
        }
    }
}
