use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};

use credo_core::{Claims, Email, Role, TokenError, TokenService};

/// Session tokens live for seven days; expiry is the only termination
/// mechanism the service has.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// HS256-signed session tokens.
///
/// The signing secret is process-wide, read-only after construction, and
/// must never be empty - the binary refuses to start without one.
#[derive(Clone)]
pub struct JwtTokenService {
    secret: Secret<String>,
    token_ttl_seconds: i64,
}

impl JwtTokenService {
    pub fn new(secret: Secret<String>, token_ttl_seconds: i64) -> Self {
        Self {
            secret,
            token_ttl_seconds,
        }
    }

    fn secret_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }

    // An `exp` in the past must be rejected immediately, so the default
    // 60-second validation leeway is switched off.
    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, email: &Email, role: Role) -> Result<String, TokenError> {
        let now = Utc::now();
        let delta = chrono::Duration::try_seconds(self.token_ttl_seconds)
            .ok_or_else(|| TokenError::Signing("token TTL out of range".to_string()))?;
        let expires_at = now
            .checked_add_signed(delta)
            .ok_or_else(|| TokenError::Signing("token expiry out of range".to_string()))?;

        let claims = Claims {
            sub: email.to_string(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret_bytes()),
        )
        .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret_bytes()),
            &Self::validation(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        })
    }
}
