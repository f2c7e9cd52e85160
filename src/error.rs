// src/error.rs
//! Error taxonomy for the roster pipeline.
//!
//! None of these escape [`crate::engine::RosterService::current_roster`]; they
//! are logged there and collapse into an empty roster. The typed entry point
//! `try_roster` hands them to callers that want the cause.

use thiserror::Error;

use crate::config::Game;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered, but not with 2xx.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Connect, TLS, timeout or body read failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Configured header value is not valid on the wire.
    #[error("invalid {name} header value {value:?}")]
    Header { name: &'static str, value: String },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Offline page loads.
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Marker heading/row/table not present in the page.
    #[error("{game}: no region matched {marker:?}")]
    LocatorMiss { game: Game, marker: &'static str },

    /// Region found, but nothing survived filtering.
    #[error("{game}: banner region yielded no character names")]
    EmptyExtraction { game: Game },
}
