use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    system_conf,
};

use credo_core::{MxResolveError, MxResolver};

/// Mail-exchange lookups against the system's configured nameservers.
///
/// The resolver timeout bounds the blocking window per lookup; a slow or
/// unresponsive nameserver surfaces as [`MxResolveError::Timeout`] instead
/// of stalling the worker.
#[derive(Clone)]
pub struct HickoryMxResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryMxResolver {
    /// Builds a resolver from the host's resolver configuration
    /// (`/etc/resolv.conf` and friends).
    pub fn from_system_conf(timeout: Duration) -> Result<Self, ResolveError> {
        let (config, mut opts) = system_conf::read_system_conf()?;
        opts.timeout = timeout;
        Ok(Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        })
    }

    /// Builds a resolver against well-known public nameservers, for hosts
    /// without a readable resolver configuration.
    pub fn with_default_nameservers(timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }
}

#[async_trait]
impl MxResolver for HickoryMxResolver {
    async fn has_mx(&self, domain: &str) -> Result<bool, MxResolveError> {
        match self.resolver.mx_lookup(domain).await {
            Ok(lookup) => Ok(lookup.iter().next().is_some()),
            // NXDOMAIN and empty answers both arrive as NoRecordsFound;
            // either way the domain cannot receive mail.
            Err(e) => match e.kind() {
                ResolveErrorKind::NoRecordsFound { .. } => Ok(false),
                ResolveErrorKind::Timeout => Err(MxResolveError::Timeout),
                _ => Err(MxResolveError::Lookup(e.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The fallback path must construct even when the host has no readable
    // resolver configuration.
    #[tokio::test]
    async fn default_nameserver_fallback_constructs() {
        let _ = HickoryMxResolver::with_default_nameservers(Duration::from_millis(100));
    }
}
