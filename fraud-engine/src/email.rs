//! Email classification: plus aliases and disposable domains

use std::collections::HashSet;
use tracing::info;

/// Split an address into local part and domain.
///
/// Exactly one `@` with text on both sides; anything else is malformed.
fn split_address(email: &str) -> Option<(&str, &str)> {
    let (local, domain) = email.trim().split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some((local, domain))
}

/// Check whether the local part carries a `+tag` (e.g. `test+alias@example.com`)
pub fn is_plus_alias(email: &str) -> bool {
    split_address(email)
        .map(|(local, _)| local.contains('+'))
        .unwrap_or(false)
}

/// Set of known throwaway mail domains, stored lower-cased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisposableDomains {
    domains: HashSet<String>,
}

impl DisposableDomains {
    /// Build from domain names; case and surrounding whitespace are ignored
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains: HashSet<String> = domains
            .into_iter()
            .map(|d| d.as_ref().trim().to_lowercase())
            .filter(|d| !d.is_empty())
            .collect();

        info!("Loaded {} disposable email domains", domains.len());
        Self { domains }
    }

    /// Check whether the address belongs to a disposable domain.
    ///
    /// Malformed addresses are never disposable.
    pub fn is_disposable(&self, email: &str) -> bool {
        match split_address(email) {
            Some((_, domain)) => self.domains.contains(&domain.to_lowercase()),
            None => false,
        }
    }

    /// Number of domains
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// True when no domains are configured
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
