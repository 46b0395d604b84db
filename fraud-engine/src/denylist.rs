//! Client IP denylist

use std::collections::HashSet;
use tracing::info;

/// Exact-match IP denylist.
///
/// Entries are compared verbatim: case-sensitive, no CIDR ranges, no
/// address normalisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpDenylist {
    entries: HashSet<String>,
}

impl IpDenylist {
    /// Build from a list of entries, trimming whitespace and dropping blanks
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: HashSet<String> = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();

        info!("Loaded IP denylist with {} entries", entries.len());
        Self { entries }
    }

    /// Check whether an IP is denylisted
    pub fn is_blocked(&self, ip: &str) -> bool {
        self.entries.contains(ip)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is denylisted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let denylist = IpDenylist::new(["10.0.0.1", "10.0.0.2"]);

        assert!(denylist.is_blocked("10.0.0.1"));
        assert!(denylist.is_blocked("10.0.0.2"));
        assert!(!denylist.is_blocked("192.168.1.1"));
        assert!(!denylist.is_blocked("10.0.0.10"));
        assert!(!denylist.is_blocked("10.0.0"));
    }

    #[test]
    fn test_no_cidr_or_case_folding() {
        let denylist = IpDenylist::new(["10.0.0.0/8", "FE80::1"]);

        assert!(!denylist.is_blocked("10.1.2.3"));
        assert!(denylist.is_blocked("10.0.0.0/8"));
        assert!(!denylist.is_blocked("fe80::1"));
        assert!(denylist.is_blocked("FE80::1"));
    }

    #[test]
    fn test_blank_entries_ignored() {
        let denylist = IpDenylist::new([" 10.0.0.1 ", " ", ""]);
        assert_eq!(denylist.len(), 1);
        assert!(denylist.is_blocked("10.0.0.1"));
        assert!(!denylist.is_blocked(""));

        assert!(IpDenylist::new(Vec::<String>::new()).is_empty());
    }
}
