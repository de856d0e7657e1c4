//! CSV record sink, one file per scanned folder

use crate::error::Result;
use crate::types::{AddressField, MessageSummary};
use regex::Regex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

/// Column order of every record file
pub const OUTPUT_COLUMNS: [&str; 12] = [
    "Date",
    "Folder",
    "Message-ID",
    "Subject",
    "Recipients",
    "Filtered",
    "From",
    "To",
    "Cc",
    "Bcc",
    "Reply-To",
    "Sender",
];

static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// Turn a folder name into a filesystem-safe file stem.
///
/// Gmail-style folder names carry brackets, slashes and spaces
/// (`[Gmail]/All Mail`); every character outside `[A-Za-z0-9]` becomes an
/// underscore.
#[must_use]
pub fn folder_file_stem(folder: &str) -> String {
    UNSAFE_CHARS.replace_all(folder, "_").into_owned()
}

/// Writes message summaries as CSV rows with a fixed header
pub struct CsvSink {
    writer: BufWriter<File>,
}

impl CsvSink {
    /// Create the file and write the header row
    pub fn create(path: &Path) -> Result<Self> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "{}", OUTPUT_COLUMNS.join(","))?;
        info!("writing records to {}", path.display());
        Ok(Self { writer })
    }

    /// Append one record. Absent values are emitted as empty cells, never
    /// dropped, so every row has the full column set.
    pub fn write(&mut self, summary: &MessageSummary) -> Result<()> {
        let mut cells = vec![
            csv_escape(&summary.date),
            csv_escape(&summary.folder),
            csv_escape(&summary.message_id),
            csv_escape(&summary.subject),
            csv_escape(&join_addresses(&summary.recipients)),
            csv_escape(&join_addresses(&summary.filtered)),
        ];
        for field in AddressField::ALL {
            cells.push(csv_escape(&join_addresses(summary.field(field))));
        }
        writeln!(self.writer, "{}", cells.join(","))?;
        Ok(())
    }

    /// Flush buffered rows to disk
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn join_addresses(addresses: &[String]) -> String {
    addresses.join(", ")
}

/// Quote a value when it contains a delimiter, quote or line break
fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
