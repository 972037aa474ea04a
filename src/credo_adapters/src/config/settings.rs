use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use http::HeaderValue;
use secrecy::Secret;
use serde::Deserialize;

use crate::auth::DEFAULT_TOKEN_TTL_SECONDS;

const DEFAULT_MX_TIMEOUT_MILLIS: u64 = 3000;

/// Process configuration, layered: defaults, then an optional `credo.json`
/// file next to the binary, then environment variables with the `CREDO_`
/// prefix and `__` as the section separator (`CREDO_AUTH__TOKEN_SECRET`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    pub email: EmailSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Signing secret for session tokens. There is no default on purpose:
    /// a missing secret must fail startup, not fall back to a known value.
    pub token_secret: Secret<String>,
    pub token_ttl_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    /// Disposable-domain list, one domain per line. Absent or unreadable
    /// degrades to an empty blocklist unless `strict_blocklist` is set.
    pub blocklist_path: Option<PathBuf>,
    pub strict_blocklist: bool,
    pub mx_timeout_millis: u64,
}

impl EmailSettings {
    pub fn mx_timeout(&self) -> Duration {
        Duration::from_millis(self.mx_timeout_millis)
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("server.allowed_origins", Vec::<String>::new())?
            .set_default("auth.token_ttl_seconds", DEFAULT_TOKEN_TTL_SECONDS)?
            .set_default("email.strict_blocklist", false)?
            .set_default("email.mx_timeout_millis", DEFAULT_MX_TIMEOUT_MILLIS as i64)?
            .add_source(File::with_name("credo").required(false))
            .add_source(Environment::with_prefix("CREDO").separator("__"))
            .build()?
            .try_deserialize()
    }
}

/// CORS origin allowlist for the `/api` routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(origins.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }
}
