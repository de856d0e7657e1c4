use recipient_scan::FilterRules;

fn addresses_under_test() -> Vec<String> {
    [
        "president@whitehouse.gov",
        "first.lady@whitehouse.gov",
        "darth.vadar@deathstar.com",
        "t.stark@tstarindustries.com",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[test]
fn test_empty_rules_return_everything_unchanged() {
    let rules = FilterRules::default();
    let input = addresses_under_test();
    assert_eq!(rules.apply(&input), input);
}

#[test]
fn test_exact_addresses_are_dropped() {
    let rules = FilterRules::new(
        ["first.lady@whitehouse.gov", "darth.vadar@deathstar.com"],
        Vec::<String>::new(),
    );
    assert_eq!(
        rules.apply(&addresses_under_test()),
        ["president@whitehouse.gov", "t.stark@tstarindustries.com"]
    );
}

#[test]
fn test_exact_domains_are_dropped() {
    let rules = FilterRules::new(Vec::<String>::new(), ["whitehouse.gov"]);
    assert_eq!(
        rules.apply(&addresses_under_test()),
        ["darth.vadar@deathstar.com", "t.stark@tstarindustries.com"]
    );
}

#[test]
fn test_both_dimensions_apply() {
    let rules = FilterRules::new(["t.stark@tstarindustries.com"], ["whitehouse.gov"]);
    assert_eq!(
        rules.apply(&addresses_under_test()),
        ["darth.vadar@deathstar.com"]
    );
}

#[test]
fn test_survivors_keep_order_and_duplicates() {
    let rules = FilterRules::new(["drop@x.com"], Vec::<String>::new());
    let input: Vec<String> = ["a@x.com", "drop@x.com", "a@x.com", "b@y.com"]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rules.apply(&input), ["a@x.com", "a@x.com", "b@y.com"]);
}

#[test]
fn test_no_subdomain_matching() {
    let rules = FilterRules::new(Vec::<String>::new(), ["x.com"]);
    let input: Vec<String> = vec!["a@mail.x.com".to_string()];
    // mail.x.com is not x.com; exact match only
    assert_eq!(rules.apply(&input), ["a@mail.x.com"]);
}

#[test]
fn test_rules_deserialize_with_defaults() {
    let rules: FilterRules = serde_json::from_str("{}").unwrap();
    assert!(rules.is_empty());

    let rules: FilterRules =
        serde_json::from_str(r#"{"ignore_domains": ["whitehouse.gov"]}"#).unwrap();
    assert!(rules.ignore_addresses.is_empty());
    assert!(rules.ignore_domains.contains("whitehouse.gov"));
}

#[test]
fn test_rules_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filters.json");
    std::fs::write(
        &path,
        r#"{"ignore_addresses": ["alerts@x.com"], "ignore_domains": []}"#,
    )
    .unwrap();

    let rules = FilterRules::from_file(&path).unwrap();
    assert!(rules.ignore_addresses.contains("alerts@x.com"));
    assert!(rules.ignore_domains.is_empty());
}
