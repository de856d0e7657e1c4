//! The scan run controller.
//!
//! Drives the whole pipeline: open each folder, search the date window,
//! fetch and summarize every message, write records, and grow the run-level
//! aggregate. The controller also owns the failure policy the inner
//! components deliberately leave to it: per-message problems (fetch failure,
//! missing date, no recipients) skip the message with a logged warning and a
//! count, a folder that cannot be opened is skipped after logging the
//! folders that do exist, and only connection-level failures abort the run.

use crate::aggregate::{AggregateReport, RecipientAggregate};
use crate::error::{Result, ScanError};
use crate::filter::FilterRules;
use crate::session::MailSession;
use crate::sink::{CsvSink, folder_file_stem};
use crate::summary::summarize;
use crate::types::MessageSummary;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Everything a run needs besides the live session
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Folders to scan, in order
    pub folders: Vec<String>,

    /// Inclusive start of the date window
    pub start_date: NaiveDate,

    /// Exclusive end of the date window
    pub before_date: NaiveDate,

    /// Ignore lists applied to every message
    pub rules: FilterRules,

    /// Directory receiving one CSV file per folder
    pub output_dir: PathBuf,
}

/// What happened during a run
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanCounts {
    /// Messages summarized and written
    pub processed: usize,

    /// Messages skipped for fetch, date or recipient problems
    pub skipped_messages: usize,

    /// Folders that could not be opened
    pub skipped_folders: usize,
}

/// Final result of a run: counts plus the deduplicated recipient view
#[derive(Debug)]
pub struct ScanReport {
    pub counts: ScanCounts,
    pub aggregate: AggregateReport,
}

/// Scan every configured folder and build the run report
pub async fn scan(session: &mut MailSession, config: &ScanConfig) -> Result<ScanReport> {
    let mut aggregate = RecipientAggregate::new();
    let mut counts = ScanCounts::default();

    for folder in &config.folders {
        info!("looking at folder {folder}");

        if let Err(err) = session.open_folder(folder).await {
            warn!("{err}; skipping this folder");
            log_folders(session).await;
            counts.skipped_folders += 1;
            continue;
        }

        let uids = session
            .search_window(config.start_date, config.before_date)
            .await?;
        info!("{} messages in {folder} within the date window", uids.len());

        let path = config
            .output_dir
            .join(format!("{}.csv", folder_file_stem(folder)));
        let mut sink = CsvSink::create(&path)?;

        let mut folder_recipients = 0usize;
        for uid in uids {
            match process_message(session, uid, folder, &config.rules).await {
                Ok(summary) => {
                    sink.write(&summary)?;
                    folder_recipients += summary.recipients.len();
                    aggregate.add(&summary.recipients);
                    counts.processed += 1;
                }
                Err(err)
                    if matches!(
                        err,
                        ScanError::Fetch { .. }
                            | ScanError::MissingDate { .. }
                            | ScanError::NoRecipients { .. }
                    ) =>
                {
                    warn!("skipping message {uid} in {folder}: {err}");
                    counts.skipped_messages += 1;
                }
                Err(err) => return Err(err),
            }
        }

        sink.finish()?;
        info!("{folder_recipients} total recipients in {folder}");
        session.close_folder().await?;
    }

    Ok(ScanReport {
        counts,
        aggregate: aggregate.finalize(),
    })
}

async fn process_message(
    session: &mut MailSession,
    uid: u32,
    folder: &str,
    rules: &FilterRules,
) -> Result<MessageSummary> {
    let raw = session.fetch_headers(uid).await?;
    let (headers, _) = mailparse::parse_headers(&raw).map_err(|e| ScanError::Fetch {
        uid,
        details: format!("unparsable header block: {e}"),
    })?;
    debug!("message {uid}: {} header lines", headers.len());
    summarize(&headers, folder, rules)
}

/// Log the account's folder list, so a misspelled folder name is easy to fix
async fn log_folders(session: &mut MailSession) {
    match session.folder_names().await {
        Ok(names) => {
            info!("available folders:");
            for name in names {
                info!("    {name}");
            }
        }
        Err(err) => warn!("could not list folders: {err}"),
    }
}
