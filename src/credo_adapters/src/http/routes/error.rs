use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use credo_application::{LoginError, RegisterError};
use credo_core::{EmailError, PasswordError, TokenError};

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The API-boundary error taxonomy.
///
/// Every use case error converts into exactly one of these variants, and
/// the status mapping below is an exhaustive match - adding a variant
/// without a status is a compile error, not a runtime 500.
///
/// The security-sensitive variants (`EmailRejected`, `InvalidCredentials`)
/// carry deliberately uninformative messages so callers cannot distinguish
/// their underlying causes.
#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("invalid registration data")]
    EmailRejected,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("account locked after too many failed attempts, contact an administrator")]
    AccountLocked,

    #[error("missing or malformed authorization header")]
    MissingToken,

    #[error("invalid token")]
    InvalidToken,

    #[error("token expired")]
    ExpiredToken,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::InvalidInput(_) | AuthApiError::EmailRejected => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            AuthApiError::InvalidCredentials
            | AuthApiError::MissingToken
            | AuthApiError::InvalidToken
            | AuthApiError::ExpiredToken => (StatusCode::UNAUTHORIZED, self.to_string()),

            AuthApiError::AccountLocked => (StatusCode::FORBIDDEN, self.to_string()),

            AuthApiError::Unexpected(_) => {
                tracing::error!(error = %self, "request failed unexpectedly");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<EmailError> for AuthApiError {
    fn from(error: EmailError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for AuthApiError {
    fn from(error: PasswordError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::EmailRejected => AuthApiError::EmailRejected,
            RegisterError::PasswordTooShort => AuthApiError::InvalidInput(error.to_string()),
            RegisterError::Hasher(e) => AuthApiError::Unexpected(e.to_string()),
            RegisterError::Store(e) => AuthApiError::Unexpected(e.to_string()),
        }
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => AuthApiError::InvalidCredentials,
            LoginError::AccountLocked => AuthApiError::AccountLocked,
            LoginError::Store(e) => AuthApiError::Unexpected(e.to_string()),
            LoginError::Hasher(e) => AuthApiError::Unexpected(e.to_string()),
            LoginError::Token(e) => e.into(),
        }
    }
}

impl From<TokenError> for AuthApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Malformed => AuthApiError::InvalidToken,
            TokenError::Expired => AuthApiError::ExpiredToken,
            TokenError::Signing(e) => AuthApiError::Unexpected(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_sensitive_rejections_share_one_registration_message() {
        // Disposable domain, undeliverable domain and duplicate email all
        // funnel through RegisterError::EmailRejected, so the body text is
        // identical by construction.
        let error = AuthApiError::from(RegisterError::EmailRejected);
        assert_eq!(error.to_string(), "invalid registration data");
    }

    #[test]
    fn token_errors_map_to_distinct_401_variants() {
        assert!(matches!(
            AuthApiError::from(TokenError::Malformed),
            AuthApiError::InvalidToken
        ));
        assert!(matches!(
            AuthApiError::from(TokenError::Expired),
            AuthApiError::ExpiredToken
        ));
    }
}
