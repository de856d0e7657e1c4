use recipient_scan::{AddressField, FilterRules, ScanError, summarize};

fn headers(raw: &[u8]) -> Vec<mailparse::MailHeader<'_>> {
    mailparse::parse_headers(raw).unwrap().0
}

const FULL_MESSAGE: &[u8] = concat!(
    "Date: Wed, 01 Jan 2025 12:00:00 +0000\r\n",
    "Message-ID: <test123@example.com>\r\n",
    "Subject: Quarterly numbers\r\n",
    "From: J Smith <j.smith@EXAMPLE.com>\r\n",
    "To: a@x.com, b@y.com\r\n",
    "Cc: c@z.com\r\n",
    "Cc: d@w.com\r\n",
    "Reply-To: reply@x.com\r\n",
    "Sender: sender@x.com\r\n",
    "\r\n",
)
.as_bytes();

#[test]
fn test_summary_captures_identifiers_and_date() {
    let headers = headers(FULL_MESSAGE);
    let summary = summarize(&headers, "INBOX", &FilterRules::default()).unwrap();

    assert_eq!(summary.date, "2025-01-01 12:00:00");
    assert_eq!(summary.folder, "INBOX");
    assert_eq!(summary.message_id, "<test123@example.com>");
    assert_eq!(summary.subject, "Quarterly numbers");
}

#[test]
fn test_recipients_follow_field_order() {
    let headers = headers(FULL_MESSAGE);
    let summary = summarize(&headers, "INBOX", &FilterRules::default()).unwrap();

    assert_eq!(
        summary.recipients,
        [
            "j.smith@example.com",
            "a@x.com",
            "b@y.com",
            "c@z.com",
            "d@w.com",
            "reply@x.com",
            "sender@x.com",
        ]
    );
}

#[test]
fn test_per_field_lists_and_absent_field_is_empty() {
    let headers = headers(FULL_MESSAGE);
    let summary = summarize(&headers, "INBOX", &FilterRules::default()).unwrap();

    assert_eq!(summary.from, ["j.smith@example.com"]);
    assert_eq!(summary.to, ["a@x.com", "b@y.com"]);
    // repeated Cc headers concatenate in order
    assert_eq!(summary.cc, ["c@z.com", "d@w.com"]);
    assert!(summary.bcc.is_empty());
    assert_eq!(summary.field(AddressField::Bcc), summary.bcc.as_slice());
    assert_eq!(summary.reply_to, ["reply@x.com"]);
    assert_eq!(summary.sender, ["sender@x.com"]);
}

#[test]
fn test_filtered_list_respects_rules() {
    let headers = headers(FULL_MESSAGE);
    let rules = FilterRules::new(Vec::<String>::new(), ["x.com"]);
    let summary = summarize(&headers, "INBOX", &rules).unwrap();

    assert_eq!(
        summary.filtered,
        ["j.smith@example.com", "b@y.com", "c@z.com", "d@w.com"]
    );
    // empty rules leave recipients untouched
    let identity = summarize(&headers, "INBOX", &FilterRules::default()).unwrap();
    assert_eq!(identity.filtered, identity.recipients);
}

#[test]
fn test_absent_id_and_subject_become_empty_strings() {
    let raw = concat!(
        "Date: Wed, 01 Jan 2025 12:00:00 +0000\r\n",
        "From: a@x.com\r\n",
        "\r\n",
    )
    .as_bytes();
    let headers = headers(raw);
    let summary = summarize(&headers, "INBOX", &FilterRules::default()).unwrap();

    assert_eq!(summary.message_id, "");
    assert_eq!(summary.subject, "");
}

#[test]
fn test_missing_date_is_an_error() {
    let raw = concat!("From: a@x.com\r\n", "To: b@y.com\r\n", "\r\n").as_bytes();
    let headers = headers(raw);
    let err = summarize(&headers, "INBOX", &FilterRules::default()).unwrap_err();

    assert!(matches!(err, ScanError::MissingDate { .. }));
}

#[test]
fn test_unparsable_date_is_an_error() {
    let raw = concat!(
        "Date: not a date at all\r\n",
        "From: a@x.com\r\n",
        "\r\n",
    )
    .as_bytes();
    let headers = headers(raw);
    let err = summarize(&headers, "INBOX", &FilterRules::default()).unwrap_err();

    assert!(matches!(err, ScanError::MissingDate { .. }));
}

#[test]
fn test_inconsistent_weekday_date_is_an_error() {
    // 2025-01-01 was a Wednesday; a contradictory weekday is rejected
    // rather than silently read as some other instant
    let raw = concat!(
        "Date: Thu, 01 Jan 2025 12:00:00 +0000\r\n",
        "From: a@x.com\r\n",
        "\r\n",
    )
    .as_bytes();
    let headers = headers(raw);
    let err = summarize(&headers, "INBOX", &FilterRules::default()).unwrap_err();

    assert!(matches!(err, ScanError::MissingDate { .. }));
}

#[test]
fn test_no_recipients_is_an_error() {
    let raw = concat!(
        "Date: Wed, 01 Jan 2025 12:00:00 +0000\r\n",
        "Message-ID: <empty@example.com>\r\n",
        "Subject: nothing addressable\r\n",
        "\r\n",
    )
    .as_bytes();
    let headers = headers(raw);
    let err = summarize(&headers, "INBOX", &FilterRules::default()).unwrap_err();

    match err {
        ScanError::NoRecipients { message_id } => {
            assert_eq!(message_id, "<empty@example.com>");
        }
        other => panic!("expected NoRecipients, got {other:?}"),
    }
}

#[test]
fn test_date_keeps_message_offset() {
    let raw = concat!(
        "Date: Wed, 01 Jan 2025 12:00:00 +0530\r\n",
        "From: a@x.com\r\n",
        "\r\n",
    )
    .as_bytes();
    let headers = headers(raw);
    let summary = summarize(&headers, "INBOX", &FilterRules::default()).unwrap();

    // rendered in the message's own offset, not converted to UTC
    assert_eq!(summary.date, "2025-01-01 12:00:00");
}
