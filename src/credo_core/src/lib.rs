pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, MAX_FAILED_ATTEMPTS, Role},
    blocklist::Blocklist,
    email::{Email, EmailError},
    password::{MIN_PASSWORD_LEN, Password, PasswordError},
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{
        Claims, CredentialHasher, CredentialHasherError, MxResolveError, MxResolver, TokenError,
        TokenService,
    },
};
