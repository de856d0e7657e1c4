//! Exact-match filtering of trusted addresses and domains

use crate::error::{Result, ScanError};
use crate::types::domain_of;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The two exact-match ignore lists applied to every message's recipients.
///
/// Both dimensions compare by plain string equality against already
/// lower-cased addresses; there is no subdomain or wildcard matching. Empty
/// rule sets make [`FilterRules::apply`] the identity function. The rules are
/// loaded once at startup and never change during a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterRules {
    /// Bare addresses to drop, e.g. `alerts@example.com`
    #[serde(default)]
    pub ignore_addresses: HashSet<String>,

    /// Domains to drop, matched against the part after the first `@`
    #[serde(default)]
    pub ignore_domains: HashSet<String>,
}

impl FilterRules {
    pub fn new<A, D>(ignore_addresses: A, ignore_domains: D) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            ignore_addresses: ignore_addresses.into_iter().map(Into::into).collect(),
            ignore_domains: ignore_domains.into_iter().map(Into::into).collect(),
        }
    }

    /// Load rules from a JSON file; missing keys default to empty sets
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ScanError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| ScanError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ignore_addresses.is_empty() && self.ignore_domains.is_empty()
    }

    /// Return the recipients that survive both ignore lists.
    ///
    /// Two passes: drop exact address matches, then drop addresses whose
    /// domain is an exact domain match. Survivors keep their original order
    /// and multiplicity. Pure function, shared freely across messages.
    #[must_use]
    pub fn apply(&self, recipients: &[String]) -> Vec<String> {
        let by_address: Vec<&String> = recipients
            .iter()
            .filter(|addr| !self.ignore_addresses.contains(addr.as_str()))
            .collect();

        by_address
            .into_iter()
            .filter(|addr| {
                !domain_of(addr).is_some_and(|domain| self.ignore_domains.contains(domain))
            })
            .cloned()
            .collect()
    }
}
