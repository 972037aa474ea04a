//! Axum route handlers.
//!
//! Thin request/response mapping only: extract and parse the payload, call
//! the use case, convert the outcome through [`error::AuthApiError`]'s
//! exhaustive status mapping.

pub mod error;
pub mod health;
pub mod login;
pub mod me;
pub mod register;

pub use error::AuthApiError;
pub use health::health;
pub use login::login;
pub use me::me;
pub use register::register;

use secrecy::{ExposeSecret, Secret};

/// Both credential routes reject absent or empty fields up front with the
/// same specific message; that much is plain input validation, not a
/// security-sensitive outcome.
pub(crate) fn require_credentials(
    email: Option<String>,
    password: Option<Secret<String>>,
) -> Result<(String, Secret<String>), AuthApiError> {
    match (email, password) {
        (Some(email), Some(password))
            if !email.is_empty() && !password.expose_secret().is_empty() =>
        {
            Ok((email, password))
        }
        _ => Err(AuthApiError::InvalidInput(
            "email and password are required".to_string(),
        )),
    }
}
