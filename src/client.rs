//! HTTP client for the remote cut path generator
//!
//! One call, one exchange: the source file and generation parameters go
//! out as a `multipart/form-data` POST to `{base}/generate`, and a
//! successful SVG answer comes back as an [`ArtifactHandle`].

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};

use crate::artifact::{ArtifactHandle, ArtifactStore};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::params::{FILE_FIELD, GenerationParams, OFFSET_FIELD, SMOOTH_FIELD};
use crate::source::{SVG_MEDIA_TYPE, SourceFile};

/// Client for the vectorization service
///
/// No timeout or retry is configured. Callers that need a bound wrap the
/// call in their own `tokio::time::timeout`.
#[derive(Debug, Clone)]
pub struct VectorizeClient {
    http: reqwest::Client,
    config: ClientConfig,
    artifacts: ArtifactStore,
}

impl VectorizeClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, ...)
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            config,
            artifacts: ArtifactStore::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Store holding every artifact this client minted and not yet released
    pub fn artifacts(&self) -> &ArtifactStore {
        &self.artifacts
    }

    /// Upload `file` and return a handle to the generated SVG
    ///
    /// Any non-success status becomes [`Error::GenerationFailed`] with the
    /// body discarded. Failures to complete the exchange surface as
    /// [`Error::Transport`].
    #[tracing::instrument(
        skip(self, file),
        fields(file = %file.file_name(), size = file.len(), offset = params.offset, smooth = params.smooth)
    )]
    pub async fn generate_vector_path(
        &self,
        file: &SourceFile,
        params: GenerationParams,
    ) -> Result<ArtifactHandle> {
        let form = build_form(file, &params)?;
        let url = self.config.generate_url();

        tracing::debug!(%url, "submitting source file");
        let response = self.http.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "cut path generation rejected");
            return Err(Error::GenerationFailed);
        }

        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(SVG_MEDIA_TYPE)
            .to_string();
        let body = response.bytes().await?;

        let handle = self.artifacts.register(body, media_type);
        tracing::debug!(uri = %handle.uri(), len = handle.len(), "artifact ready");
        Ok(handle)
    }
}

/// Assemble the three-field form: file, offset, smooth
fn build_form(file: &SourceFile, params: &GenerationParams) -> Result<Form> {
    let mut part = Part::stream_with_length(file.contents().clone(), file.len() as u64)
        .file_name(file.file_name().to_string());
    if let Some(media_type) = file.media_type() {
        part = part
            .mime_str(media_type)
            .map_err(|_| Error::InvalidMediaType(media_type.to_string()))?;
    }

    Ok(Form::new()
        .part(FILE_FIELD, part)
        .text(OFFSET_FIELD, params.offset_field())
        .text(SMOOTH_FIELD, params.smooth_field()))
}
