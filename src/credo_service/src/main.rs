use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};
use secrecy::ExposeSecret;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use credo_adapters::{
    Argon2CredentialHasher, HashMapAccountStore, HickoryMxResolver, JwtTokenService, Settings,
};
use credo_core::Blocklist;
use credo_service::AuthService;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load().map_err(|e| eyre!("failed to load configuration: {e}"))?;

    // The one startup-fatal condition: never run without token integrity.
    if settings.auth.token_secret.expose_secret().is_empty() {
        return Err(eyre!(
            "auth.token_secret is empty; set CREDO_AUTH__TOKEN_SECRET"
        ));
    }

    let blocklist = Arc::new(load_blocklist(&settings)?);

    let account_store = HashMapAccountStore::new();
    let mx_timeout = settings.email.mx_timeout();
    let mx_resolver = match HickoryMxResolver::from_system_conf(mx_timeout) {
        Ok(resolver) => resolver,
        Err(error) => {
            tracing::warn!(
                %error,
                "could not read system resolver configuration, using default nameservers"
            );
            HickoryMxResolver::with_default_nameservers(mx_timeout)
        }
    };
    let hasher = Argon2CredentialHasher::new();
    let token_service = JwtTokenService::new(
        settings.auth.token_secret.clone(),
        settings.auth.token_ttl_seconds,
    );

    let service = AuthService::new(account_store, blocklist, mx_resolver, hasher, token_service);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    service
        .run_standalone(listener, Some(settings.server.allowed_origins.clone()))
        .await?;

    Ok(())
}

/// Blocklist loading policy: fail-open by default, fatal under
/// `strict_blocklist`.
fn load_blocklist(settings: &Settings) -> Result<Blocklist> {
    match &settings.email.blocklist_path {
        Some(path) if settings.email.strict_blocklist => Blocklist::from_file(path)
            .map_err(|e| eyre!("failed to load blocklist from {}: {e}", path.display())),
        Some(path) => Ok(Blocklist::from_file_or_empty(path)),
        None if settings.email.strict_blocklist => Err(eyre!(
            "email.strict_blocklist is set but email.blocklist_path is not configured"
        )),
        None => Ok(Blocklist::empty()),
    }
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
