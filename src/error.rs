// src/error.rs
//! Error taxonomy for a scrape run.
//!
//! Each pipeline stage has its own error type; [`Error`] wraps them so the
//! runner can bubble everything up with `?` and the binary can report it.

use std::path::PathBuf;

use thiserror::Error;

/// Network or HTTP-level failure while retrieving a page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid URL {url}: {reason}")]
    Url { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// The page did not have the structure we expect (site markup changed).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected element `{selector}` not found")]
    MissingElement { selector: String },

    #[error("row {row}: missing cell {column}")]
    MissingCell { row: usize, column: usize },

    #[error("row {row}, cell {column}: `{value}` is not a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("invalid CSS selector `{0}`")]
    InvalidSelector(String),
}

/// Output file could not be produced (or read back).
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Ods {
        path: PathBuf,
        #[source]
        source: spreadsheet_ods::OdsError,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Configuration file could not be loaded or is incomplete.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config value `{0}` must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{kind} `{name}` not found on the site")]
    NotFound { kind: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
