//! Error types for fetching and tag counting.
//!
//! Every failure is surfaced to the caller as a classifiable [`TeiError`];
//! nothing here retries or recovers.

use std::path::PathBuf;
use std::str::Utf8Error;

/// Broad class of a [`TeiError`], for callers that only need to branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Filesystem,
    Parse,
}

/// Network-side failure while fetching a resource.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The URL could not be parsed.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: url::ParseError },
    /// libcurl reported an error (unreachable host, timeout, etc.).
    #[error("request to {url} failed: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    HttpStatus { url: String, code: u32 },
}

/// The input could not be turned into an element tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{}: not well-formed XML: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },
    #[error("{}: not valid UTF-8: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum TeiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("{}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl TeiError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TeiError::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TeiError::Transport(_) => ErrorKind::Transport,
            TeiError::Filesystem { .. } => ErrorKind::Filesystem,
            TeiError::Parse(_) => ErrorKind::Parse,
        }
    }
}

pub type Result<T> = std::result::Result<T, TeiError>;
