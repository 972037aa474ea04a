use std::collections::HashSet;
use std::io;
use std::path::Path;

use super::email::Email;

/// Immutable set of disposable-email domains.
///
/// Loaded once at startup and shared read-only for the life of the process,
/// so lookups never need synchronization. An empty blocklist means the
/// disposability gate passes everything (fail-open); whether a missing
/// source file degrades to empty or aborts startup is the caller's choice
/// via the `strict_blocklist` configuration flag.
#[derive(Debug, Default, Clone)]
pub struct Blocklist {
    domains: HashSet<String>,
}

impl Blocklist {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read one domain per line, trimming whitespace and skipping blanks.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect())
    }

    /// Fail-open variant of [`from_file`](Self::from_file): an unreadable
    /// source logs a warning and yields the empty set, so the disposability
    /// gate degrades to a no-op instead of taking the service down.
    pub fn from_file_or_empty(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(blocklist) => {
                tracing::info!(
                    path = %path.display(),
                    domains = blocklist.len(),
                    "loaded disposable-domain blocklist"
                );
                blocklist
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "could not load disposable-domain blocklist, disposable check disabled"
                );
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn contains_domain(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    /// Membership test on the address's domain part.
    pub fn is_disposable(&self, email: &Email) -> bool {
        self.contains_domain(email.domain())
    }
}

impl FromIterator<String> for Blocklist {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            domains: iter.into_iter().collect(),
        }
    }
}
