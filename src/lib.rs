// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Mailbox Recipient Scanner
//!
//! Scans IMAP folders over a date window, extracts every recipient-type
//! address (From/To/Cc/Bcc/Reply-To/Sender) from each message header,
//! filters out trusted addresses and domains, and reports per-message
//! records plus run-level unique-address and unique-domain sets.
//!
//! # Pipeline
//!
//! - [`normalize`] flattens raw header values into bare lower-cased addresses
//! - [`summarize`] builds one [`MessageSummary`] per message
//! - [`FilterRules`] drops exact-match trusted addresses and domains
//! - [`RecipientAggregate`] accumulates recipients across the whole run
//!
//! # Example
//!
//! ```rust
//! use recipient_scan::{FilterRules, summarize};
//!
//! let raw = b"From: J Smith <j.smith@EXAMPLE.com>\r\nTo: a@x.com, b@y.com\r\n\
//!             Date: Wed, 01 Jan 2025 12:00:00 +0000\r\n\r\n";
//! let (headers, _) = mailparse::parse_headers(raw).unwrap();
//!
//! let summary = summarize(&headers, "INBOX", &FilterRules::default()).unwrap();
//! assert_eq!(summary.recipients, ["j.smith@example.com", "a@x.com", "b@y.com"]);
//! ```

mod aggregate;
mod error;
mod filter;
mod normalize;
mod run;
mod session;
mod sink;
mod summary;
mod types;

pub use aggregate::{AggregateReport, RecipientAggregate};
pub use error::{Result, ScanError};
pub use filter::FilterRules;
pub use normalize::normalize;
pub use run::{ScanConfig, ScanCounts, ScanReport, scan};
pub use session::MailSession;
pub use sink::{CsvSink, OUTPUT_COLUMNS, folder_file_stem};
pub use summary::summarize;
pub use types::{AddressField, DATE_FORMAT, MessageSummary, domain_of};
