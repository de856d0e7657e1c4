//! Core types for summarized messages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp layout used for the Date column of every record
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The six header slots that may carry email addresses on a message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AddressField {
    From,
    To,
    Cc,
    Bcc,
    ReplyTo,
    Sender,
}

impl AddressField {
    /// Every address-bearing field, in the order they are extracted and
    /// reported. This ordering decides how the combined recipients list is
    /// assembled, so it is passed around explicitly rather than assumed.
    pub const ALL: [Self; 6] = [
        Self::From,
        Self::To,
        Self::Cc,
        Self::Bcc,
        Self::ReplyTo,
        Self::Sender,
    ];

    /// The header name as it appears on the wire and in report columns
    #[must_use]
    pub const fn header_name(self) -> &'static str {
        match self {
            Self::From => "From",
            Self::To => "To",
            Self::Cc => "Cc",
            Self::Bcc => "Bcc",
            Self::ReplyTo => "Reply-To",
            Self::Sender => "Sender",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header_name())
    }
}

/// One record per processed message.
///
/// The per-field lists hold normalized addresses (lower-cased, display names
/// stripped) in parse order. `recipients` is their concatenation in
/// [`AddressField::ALL`] order; `filtered` is the subsequence of `recipients`
/// that survived the run's filter rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSummary {
    /// Message date formatted with [`DATE_FORMAT`]
    pub date: String,

    /// Folder the message was found in
    pub folder: String,

    /// Message-ID header, empty when absent
    pub message_id: String,

    /// Subject header, empty when absent
    pub subject: String,

    /// Combined recipients across all address fields, duplicates kept
    pub recipients: Vec<String>,

    /// Recipients surviving the filter rules, order preserved
    pub filtered: Vec<String>,

    pub from: Vec<String>,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub reply_to: Vec<String>,
    pub sender: Vec<String>,
}

impl MessageSummary {
    /// Addresses extracted for one field
    #[must_use]
    pub fn field(&self, field: AddressField) -> &[String] {
        match field {
            AddressField::From => &self.from,
            AddressField::To => &self.to,
            AddressField::Cc => &self.cc,
            AddressField::Bcc => &self.bcc,
            AddressField::ReplyTo => &self.reply_to,
            AddressField::Sender => &self.sender,
        }
    }
}

/// Domain portion of a normalized address: the substring after the first `@`.
///
/// Normalized addresses always contain an `@`; anything without one yields
/// `None` and is left alone by domain-based logic.
#[must_use]
pub fn domain_of(address: &str) -> Option<&str> {
    address.split_once('@').map(|(_, domain)| domain)
}
