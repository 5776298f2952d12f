//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data file
    // ---------------------------
    #[error("Malformed data file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid fill-up type: {0}")]
    InvalidFuelType(String),

    #[error("Invalid time zone: {0}")]
    InvalidTimezone(String),

    // ---------------------------
    // Form errors
    // ---------------------------
    #[error("Fill-up form is incomplete: missing {0}")]
    IncompleteForm(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type AppResult<T> = Result<T, AppError>;
