use std::collections::HashSet;

use async_trait::async_trait;

use credo_core::{MxResolveError, MxResolver};

/// Resolver with canned answers, for tests and offline development.
#[derive(Debug, Clone, Default)]
pub struct StaticMxResolver {
    deliverable: HashSet<String>,
    accept_all: bool,
}

impl StaticMxResolver {
    /// Every domain resolves as deliverable.
    pub fn accepting_all() -> Self {
        Self {
            deliverable: HashSet::new(),
            accept_all: true,
        }
    }

    /// Only the listed domains resolve as deliverable.
    pub fn with_deliverable<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            deliverable: domains.into_iter().map(Into::into).collect(),
            accept_all: false,
        }
    }
}

#[async_trait]
impl MxResolver for StaticMxResolver {
    async fn has_mx(&self, domain: &str) -> Result<bool, MxResolveError> {
        Ok(self.accept_all || self.deliverable.contains(domain))
    }
}
