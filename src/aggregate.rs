//! Run-level recipient aggregation

use crate::types::domain_of;
use serde::Serialize;
use std::collections::BTreeSet;

/// Accumulates every recipient seen across a run.
///
/// Fed the unfiltered recipients of each summarized message; filtering is a
/// per-message concern and never applied here. Finalizing derives the unique
/// address and domain views once, after the last message of the last folder.
#[derive(Debug, Default)]
pub struct RecipientAggregate {
    recipients: Vec<String>,
}

impl RecipientAggregate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message's recipients, duplicates included
    pub fn add(&mut self, recipients: &[String]) {
        self.recipients.extend_from_slice(recipients);
    }

    /// Number of recipients recorded so far, duplicates included
    #[must_use]
    pub fn total(&self) -> usize {
        self.recipients.len()
    }

    /// Derive the deduplicated views. Consumes the aggregate; nothing may be
    /// added afterwards.
    #[must_use]
    pub fn finalize(self) -> AggregateReport {
        let unique_addresses: BTreeSet<String> = self.recipients.iter().cloned().collect();
        let unique_domains: BTreeSet<String> = unique_addresses
            .iter()
            .filter_map(|addr| domain_of(addr))
            .map(str::to_string)
            .collect();

        AggregateReport {
            all_recipients: self.recipients,
            unique_addresses,
            unique_domains,
        }
    }
}

/// The deduplicated address and domain view of an entire run
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    /// Every recipient in processing order, duplicates kept
    pub all_recipients: Vec<String>,

    /// Deduplicated addresses, sorted
    pub unique_addresses: BTreeSet<String>,

    /// Deduplicated domains of the unique addresses, sorted
    pub unique_domains: BTreeSet<String>,
}
