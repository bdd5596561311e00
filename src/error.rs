//! Error types for the cut path client

use std::path::PathBuf;

/// Errors produced while talking to the vectorization service
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service answered, but with a non-success status.
    #[error("cut path generation failed")]
    GenerationFailed,

    /// The request never completed (connect, DNS, abort, body read).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("failed to read source file '{}': {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid API base URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("no API base URL configured (set {})", crate::config::API_BASE_ENV)]
    MissingBaseUrl,

    #[error("invalid media type '{0}'")]
    InvalidMediaType(String),

    #[error("response is not an SVG document: {0}")]
    InvalidSvg(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when the service was reached and rejected the request
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, Error::GenerationFailed)
    }

    /// True when the request could not be completed at all
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
