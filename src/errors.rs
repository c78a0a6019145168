//! Unified application error type.
//! All modules (db, core, cli, backup) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid entry '{0}': expected \"Lecturer=PRESENT[/ABSENT]\"")]
    InvalidEntry(String),

    #[error("Unknown lecturer: {0}")]
    UnknownLecturer(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup sync error: {0}")]
    Sync(#[from] SyncError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while pushing the ledger snapshot to the remote backup.
/// Separate from AppError so the save path can downgrade them to a warning:
/// the local write has already succeeded and is never rolled back.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("remote returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("snapshot serialization failed: {0}")]
    Serialize(String),

    #[error("remote content changed during update and the retry failed")]
    Conflict,

    #[error("failed to write local mirror: {0}")]
    Mirror(String),
}
