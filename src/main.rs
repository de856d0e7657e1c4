//! Command-line mailbox recipient scanner.
//!
//! Connects to an IMAP server, scans the requested folders over a date
//! window, writes one CSV record file per folder, and optionally prints
//! run-level listings of recipients, unique addresses and unique domains.

use anyhow::Context;
use chrono::{Days, NaiveDate, Utc};
use clap::Parser;
use recipient_scan::{FilterRules, MailSession, ScanConfig, scan};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "recipient-scan",
    version,
    about = "Retrieve recipients from mailbox folders within a date range and write them to CSV files"
)]
struct Cli {
    /// Mail account username
    #[arg(short, long)]
    username: String,

    /// Mail account password. Prefer an app-specific password; the value is
    /// visible in the process list.
    #[arg(short, long)]
    password: String,

    /// IMAP server host
    #[arg(long, default_value = "imap.gmail.com")]
    imap_server: String,

    /// IMAP server port
    #[arg(long, default_value_t = 993)]
    imap_port: u16,

    /// Folder to scan; repeat for multiple folders. Without one, the
    /// account's folders are listed and the program exits.
    #[arg(short = 'f', long = "folder")]
    folders: Vec<String>,

    /// Start of the date window, YYYY-MM-DD. Default: one week ago.
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Exclusive end of the date window, YYYY-MM-DD. Default: today.
    #[arg(long)]
    before_date: Option<NaiveDate>,

    /// JSON file with ignore_addresses / ignore_domains lists
    #[arg(long)]
    filters: Option<PathBuf>,

    /// Directory for the per-folder CSV files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Print every recipient seen across the run, sorted
    #[arg(long)]
    all_addresses: bool,

    /// Print the unique addresses across the run, sorted
    #[arg(long)]
    unique_addresses: bool,

    /// Print the unique domains across the run, sorted
    #[arg(long)]
    unique_domains: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Dates before today make repeated runs on the same day reproducible
    let before_date = cli.before_date.unwrap_or_else(|| Utc::now().date_naive());
    let start_date = cli
        .start_date
        .unwrap_or_else(|| before_date - Days::new(7));

    let rules = match &cli.filters {
        Some(path) => FilterRules::from_file(path)?,
        None => FilterRules::default(),
    };
    if rules.is_empty() {
        info!("no filter rules loaded; filtered lists will match recipients");
    }

    let mut session = MailSession::connect(
        &cli.imap_server,
        cli.imap_port,
        &cli.username,
        &cli.password,
    )
    .await?;

    if cli.folders.is_empty() {
        for name in session.folder_names().await? {
            info!("    {name}");
        }
        session.logout().await.ok();
        anyhow::bail!("no folder given; pick one of the folders above with --folder (example: --folder INBOX)");
    }

    let config = ScanConfig {
        folders: cli.folders.clone(),
        start_date,
        before_date,
        rules,
        output_dir: cli.output_dir.clone(),
    };

    let report = scan(&mut session, &config)
        .await
        .context("mailbox scan failed")?;
    session.logout().await?;

    let aggregate = &report.aggregate;
    info!(
        "{} total recipients across {:?}",
        aggregate.all_recipients.len(),
        config.folders
    );
    info!("{} unique recipients", aggregate.unique_addresses.len());
    info!("{} unique domains", aggregate.unique_domains.len());
    if report.counts.skipped_messages > 0 || report.counts.skipped_folders > 0 {
        warn!(
            "skipped {} messages and {} folders; see warnings above",
            report.counts.skipped_messages, report.counts.skipped_folders
        );
    }

    if cli.all_addresses {
        let mut all = aggregate.all_recipients.clone();
        all.sort_unstable();
        print_listing("List of all recipients", &all);
    }
    if cli.unique_domains {
        let domains: Vec<String> = aggregate.unique_domains.iter().cloned().collect();
        print_listing("List of UNIQUE domains", &domains);
    }
    if cli.unique_addresses {
        let addresses: Vec<String> = aggregate.unique_addresses.iter().cloned().collect();
        print_listing("List of UNIQUE recipients", &addresses);
    }

    Ok(())
}

fn print_listing(title: &str, items: &[String]) {
    println!("\n{title}: {}", items.len());
    println!("-------------------------------");
    for item in items {
        println!("{item}");
    }
}
