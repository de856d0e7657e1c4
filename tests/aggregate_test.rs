use recipient_scan::RecipientAggregate;

fn addrs(raw: &[&str]) -> Vec<String> {
    raw.iter().map(ToString::to_string).collect()
}

#[test]
fn test_finalize_dedupes_addresses_and_domains() {
    let mut aggregate = RecipientAggregate::new();
    aggregate.add(&addrs(&["a@x.com", "b@y.com", "a@x.com"]));

    let report = aggregate.finalize();
    assert_eq!(
        report.unique_addresses.iter().collect::<Vec<_>>(),
        ["a@x.com", "b@y.com"]
    );
    assert_eq!(
        report.unique_domains.iter().collect::<Vec<_>>(),
        ["x.com", "y.com"]
    );
}

#[test]
fn test_all_recipients_keep_duplicates_and_order() {
    let mut aggregate = RecipientAggregate::new();
    aggregate.add(&addrs(&["b@y.com", "a@x.com"]));
    aggregate.add(&addrs(&["a@x.com"]));

    assert_eq!(aggregate.total(), 3);
    let report = aggregate.finalize();
    assert_eq!(report.all_recipients, ["b@y.com", "a@x.com", "a@x.com"]);
}

#[test]
fn test_shared_domains_collapse() {
    let mut aggregate = RecipientAggregate::new();
    aggregate.add(&addrs(&["a@x.com", "b@x.com", "c@x.com"]));

    let report = aggregate.finalize();
    assert_eq!(report.unique_addresses.len(), 3);
    assert_eq!(report.unique_domains.iter().collect::<Vec<_>>(), ["x.com"]);
}

#[test]
fn test_empty_run_finalizes_empty() {
    let report = RecipientAggregate::new().finalize();
    assert!(report.all_recipients.is_empty());
    assert!(report.unique_addresses.is_empty());
    assert!(report.unique_domains.is_empty());
}
