//! Endpoint configuration for the vectorization service

use url::Url;

use crate::error::{Error, Result};

/// Environment variable holding the service base URL
pub const API_BASE_ENV: &str = "CUTPATH_API_BASE";

/// Path segment of the generation endpoint, appended to the base path
pub const GENERATE_SEGMENT: &str = "generate";

/// Read-only client configuration, established once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base: String,
    endpoint: Url,
}

impl ClientConfig {
    /// Validate `api_base` as an absolute http(s) URL
    ///
    /// `generate` is appended to the base path, so any query on the base is
    /// kept after it. Fragments are dropped since they never reach the server.
    pub fn new(api_base: &str) -> Result<Self> {
        let trimmed = api_base.trim();
        let mut endpoint = Url::parse(trimmed).map_err(|source| Error::InvalidBaseUrl {
            value: trimmed.to_string(),
            source,
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::UnsupportedScheme(trimmed.to_string()));
        }

        endpoint
            .path_segments_mut()
            .map_err(|_| Error::UnsupportedScheme(trimmed.to_string()))?
            .pop_if_empty()
            .push(GENERATE_SEGMENT);
        endpoint.set_fragment(None);

        Ok(Self {
            api_base: trimmed.trim_end_matches('/').to_string(),
            endpoint,
        })
    }

    /// Read the base URL from `CUTPATH_API_BASE`
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(API_BASE_ENV).ok())
    }

    /// Build from an optional raw value; unset or blank counts as missing
    pub fn from_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Err(Error::MissingBaseUrl),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Full URL of the generation endpoint
    pub fn generate_url(&self) -> String {
        self.endpoint.to_string()
    }
}
