//! IMAP session management.
//!
//! Thin, read-only session over `async-imap` with TLS. The session moves
//! through three states — disconnected, connected, folder selected — and the
//! operations that need a selected folder check that precondition up front
//! instead of letting the server answer with a protocol error.
//!
//! Folders are opened with EXAMINE so a scan never flips `\Seen` flags, and
//! only the RFC822 header section is fetched since the pipeline never looks
//! at bodies.

use crate::error::{Result, ScanError};
use chrono::NaiveDate;
use futures::TryStreamExt;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tokio_rustls::client::TlsStream;
use tokio_rustls::rustls::pki_types::ServerName;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tracing::{debug, info};

/// IMAP SEARCH date layout, e.g. `31-Jan-2021`
const SEARCH_DATE_FORMAT: &str = "%d-%b-%Y";

// The tokio runtime feature of async-imap takes the TLS stream as-is; it
// already satisfies the tokio I/O traits the session requires.
type ImapSession = async_imap::Session<TlsStream<TcpStream>>;

/// An authenticated IMAP session
pub struct MailSession {
    session: ImapSession,
    selected: Option<String>,
}

impl MailSession {
    /// Connect over TLS and log in. Any transport or authentication failure
    /// is fatal for the run.
    pub async fn connect(
        server: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        let tcp_stream = TcpStream::connect((server, port))
            .await
            .map_err(|e| ScanError::Connection(format!("TCP connect failed: {e}")))?;

        let config = ClientConfig::builder()
            .with_root_certificates(RootCertStore::from_iter(
                webpki_roots::TLS_SERVER_ROOTS.iter().cloned(),
            ))
            .with_no_client_auth();
        let connector = TlsConnector::from(Arc::new(config));
        let server_name = ServerName::try_from(server.to_string())
            .map_err(|e| ScanError::Connection(format!("invalid server name: {e}")))?;
        let tls_stream = connector
            .connect(server_name, tcp_stream)
            .await
            .map_err(|e| ScanError::Connection(format!("TLS handshake failed: {e}")))?;

        let client = async_imap::Client::new(tls_stream);
        let session = client
            .login(username, password)
            .await
            .map_err(|(e, _)| ScanError::Connection(format!("login failed: {e}")))?;
        info!("logged in to {server} as {username}");

        Ok(Self {
            session,
            selected: None,
        })
    }

    /// Names of every folder visible on the account
    pub async fn folder_names(&mut self) -> Result<Vec<String>> {
        let stream = self
            .session
            .list(Some(""), Some("*"))
            .await
            .map_err(imap_err)?;
        let names: Vec<_> = stream.try_collect().await.map_err(imap_err)?;
        Ok(names.iter().map(|name| name.name().to_string()).collect())
    }

    /// Open a folder read-only. Fails with [`ScanError::FolderAccess`] when
    /// the folder does not exist or cannot be examined.
    pub async fn open_folder(&mut self, folder: &str) -> Result<()> {
        self.selected = None;
        let mailbox = self
            .session
            .examine(folder)
            .await
            .map_err(|e| ScanError::FolderAccess {
                folder: folder.to_string(),
                details: e.to_string(),
            })?;
        debug!("examined {folder}: {} messages", mailbox.exists);
        self.selected = Some(folder.to_string());
        Ok(())
    }

    /// UIDs of the selected folder's messages within `[start, before)`,
    /// ascending
    pub async fn search_window(
        &mut self,
        start_date: NaiveDate,
        before_date: NaiveDate,
    ) -> Result<Vec<u32>> {
        if self.selected.is_none() {
            return Err(ScanError::NoFolderSelected);
        }

        let query = format!(
            "(SINCE \"{}\" BEFORE \"{}\")",
            start_date.format(SEARCH_DATE_FORMAT),
            before_date.format(SEARCH_DATE_FORMAT),
        );
        debug!("searching with {query}");

        let uids = self.session.uid_search(&query).await.map_err(imap_err)?;
        let mut uids: Vec<u32> = uids.into_iter().collect();
        uids.sort_unstable();
        Ok(uids)
    }

    /// Fetch the raw header block of one message by UID
    pub async fn fetch_headers(&mut self, uid: u32) -> Result<Vec<u8>> {
        if self.selected.is_none() {
            return Err(ScanError::NoFolderSelected);
        }

        let mut stream = self
            .session
            .uid_fetch(uid.to_string(), "RFC822.HEADER")
            .await
            .map_err(|e| fetch_err(uid, &e))?;
        let fetch = stream
            .try_next()
            .await
            .map_err(|e| fetch_err(uid, &e))?
            .ok_or_else(|| ScanError::Fetch {
                uid,
                details: "server returned no data".to_string(),
            })?;

        fetch
            .header()
            .map(<[u8]>::to_vec)
            .ok_or_else(|| ScanError::Fetch {
                uid,
                details: "response carried no header section".to_string(),
            })
    }

    /// Close the selected folder, if any
    pub async fn close_folder(&mut self) -> Result<()> {
        if self.selected.take().is_some() {
            self.session.close().await.map_err(imap_err)?;
        }
        Ok(())
    }

    /// End the session
    pub async fn logout(mut self) -> Result<()> {
        self.session.logout().await.map_err(imap_err)
    }
}

fn imap_err(e: async_imap::error::Error) -> ScanError {
    ScanError::Connection(e.to_string())
}

fn fetch_err(uid: u32, e: &async_imap::error::Error) -> ScanError {
    ScanError::Fetch {
        uid,
        details: e.to_string(),
    }
}
