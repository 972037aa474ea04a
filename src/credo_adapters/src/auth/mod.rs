pub mod argon2_credential_hasher;
pub mod jwt_token_service;

pub use argon2_credential_hasher::Argon2CredentialHasher;
pub use jwt_token_service::{DEFAULT_TOKEN_TTL_SECONDS, JwtTokenService};
