//! Header-value to bare-address normalization

use tracing::debug;

/// Flatten raw header-line values into bare, lower-cased addresses.
///
/// Each value goes through standard address-list decomposition, so
/// comma-separated lists, quoted display names and angle-bracket syntax all
/// parse; display names are dropped. Parse order is preserved and nothing is
/// deduplicated here, because the combined recipients list downstream keeps
/// duplicates on purpose. A value that yields no parsable address contributes
/// nothing.
#[must_use]
pub fn normalize(raw_values: &[String]) -> Vec<String> {
    let mut addresses = Vec::new();

    for value in raw_values {
        let Ok(parsed) = mailparse::addrparse(value) else {
            debug!("no parsable address in header value: {value}");
            continue;
        };

        for addr in parsed.iter() {
            match addr {
                mailparse::MailAddr::Single(info) => {
                    addresses.push(info.addr.to_lowercase());
                }
                mailparse::MailAddr::Group(group) => {
                    addresses.extend(group.addrs.iter().map(|info| info.addr.to_lowercase()));
                }
            }
        }
    }

    addresses
}
