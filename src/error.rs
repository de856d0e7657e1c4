//! Error types for the mailbox scan

use thiserror::Error;

/// Errors that can occur while scanning a mailbox
#[derive(Error, Debug)]
pub enum ScanError {
    /// Transport or authentication failure against the mail server
    #[error("connection failed: {0}")]
    Connection(String),

    /// A requested folder does not exist or could not be opened
    #[error("cannot open folder {folder}: {details}")]
    FolderAccess { folder: String, details: String },

    /// An operation that needs an open folder was called without one
    #[error("operation requires a selected folder")]
    NoFolderSelected,

    /// A specific message could not be retrieved or its header block was unusable
    #[error("failed to fetch message {uid}: {details}")]
    Fetch { uid: u32, details: String },

    /// A message lacks a parsable Date header
    #[error("message {message_id:?} has no usable Date header: {details}")]
    MissingDate { message_id: String, details: String },

    /// A message carries no addresses in any recipient field
    #[error("message {message_id:?} carries no addresses in any recipient field")]
    NoRecipients { message_id: String },

    /// Filter rules could not be read or deserialized
    #[error("invalid filter rules: {0}")]
    Config(String),

    /// Writing a record to the output sink failed
    #[error("output sink error: {0}")]
    Sink(#[from] std::io::Error),
}

/// Result type for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;
