pub mod auth;
pub mod config;
pub mod dns;
pub mod http;
pub mod persistence;

pub use self::auth::{Argon2CredentialHasher, JwtTokenService};
pub use self::config::{AllowedOrigins, Settings};
pub use self::dns::{HickoryMxResolver, StaticMxResolver};
pub use self::persistence::HashMapAccountStore;
