//! Per-message summarization

use crate::error::{Result, ScanError};
use crate::filter::FilterRules;
use crate::normalize::normalize;
use crate::types::{AddressField, DATE_FORMAT, MessageSummary};
use chrono::DateTime;
use mailparse::{MailHeader, MailHeaderMap};
use tracing::debug;

/// Build a [`MessageSummary`] from a parsed header map.
///
/// Message-ID and Subject are taken verbatim (absent becomes an empty
/// string). The Date header is mandatory and must parse; a message without
/// one fails with [`ScanError::MissingDate`]. Each address field is
/// normalized in [`AddressField::ALL`] order and appended to the combined
/// recipients list; a message with no addresses anywhere fails with
/// [`ScanError::NoRecipients`], since downstream aggregation assumes every
/// summarized message contributes at least one address. The caller decides
/// whether either failure skips the message or aborts the run.
pub fn summarize(
    headers: &[MailHeader<'_>],
    folder: &str,
    rules: &FilterRules,
) -> Result<MessageSummary> {
    let message_id = headers.get_first_value("Message-ID").unwrap_or_default();
    let subject = headers.get_first_value("Subject").unwrap_or_default();
    let date = extract_date(headers, &message_id)?;

    let fields =
        AddressField::ALL.map(|field| normalize(&headers.get_all_values(field.header_name())));

    let recipients: Vec<String> = fields.iter().flatten().cloned().collect();
    if recipients.is_empty() {
        return Err(ScanError::NoRecipients { message_id });
    }

    let filtered = rules.apply(&recipients);
    debug!(
        "summarized {message_id:?}: {} recipients, {} after filtering",
        recipients.len(),
        filtered.len()
    );

    let [from, to, cc, bcc, reply_to, sender] = fields;
    Ok(MessageSummary {
        date,
        folder: folder.to_string(),
        message_id,
        subject,
        recipients,
        filtered,
        from,
        to,
        cc,
        bcc,
        reply_to,
        sender,
    })
}

/// Parse the Date header into the fixed record timestamp.
///
/// RFC 2822 parsing keeps the message's own UTC offset, so the rendered
/// timestamp matches what the sender wrote. Anything the parser rejects is
/// a [`ScanError::MissingDate`] failure for the caller to handle; there is
/// no lenient fallback, because the lenient parsers happily read garbage as
/// the epoch.
fn extract_date(headers: &[MailHeader<'_>], message_id: &str) -> Result<String> {
    let raw = headers
        .get_first_value("Date")
        .ok_or_else(|| ScanError::MissingDate {
            message_id: message_id.to_string(),
            details: "header absent".to_string(),
        })?;

    let date = DateTime::parse_from_rfc2822(raw.trim()).map_err(|e| ScanError::MissingDate {
        message_id: message_id.to_string(),
        details: format!("{e}: {raw}"),
    })?;
    Ok(date.format(DATE_FORMAT).to_string())
}
