//! Process-local handles to generated SVG artifacts
//!
//! Every successful generation registers its response body in an
//! [`ArtifactStore`] under a fresh `blob:` URI and hands the caller an
//! [`ArtifactHandle`]. The store keeps the blob addressable until the
//! handle is released, either explicitly with [`ArtifactHandle::release`]
//! or when the handle is dropped.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;
use uuid::Uuid;

/// Scheme prefix of artifact URIs
pub const BLOB_URI_PREFIX: &str = "blob:cutpath/";

#[derive(Debug, Clone)]
struct Blob {
    contents: Bytes,
    media_type: String,
}

/// Registry of live artifact blobs, shared by a client and its handles
#[derive(Debug, Clone, Default)]
pub struct ArtifactStore {
    blobs: Arc<DashMap<String, Blob>>,
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a blob under a freshly minted URI
    pub fn register(&self, contents: Bytes, media_type: impl Into<String>) -> ArtifactHandle {
        let uri = format!("{BLOB_URI_PREFIX}{}", Uuid::new_v4());
        let blob = Blob {
            contents,
            media_type: media_type.into(),
        };
        self.blobs.insert(uri.clone(), blob.clone());

        ArtifactHandle {
            uri,
            blob,
            store: self.clone(),
        }
    }

    /// Look up the bytes behind a URI; `None` once the handle is released
    pub fn resolve(&self, uri: &str) -> Option<Bytes> {
        self.blobs.get(uri).map(|entry| entry.contents.clone())
    }

    /// Number of unreleased artifacts
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    fn revoke(&self, uri: &str) -> bool {
        self.blobs.remove(uri).is_some()
    }
}

/// Owned reference to one generated SVG blob
///
/// The URI is only meaningful inside this process and stops resolving once
/// the handle is released.
#[must_use = "dropping an ArtifactHandle releases the artifact immediately"]
pub struct ArtifactHandle {
    uri: String,
    blob: Blob,
    store: ArtifactStore,
}

impl ArtifactHandle {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The exact bytes returned by the service
    pub fn contents(&self) -> &Bytes {
        &self.blob.contents
    }

    pub fn media_type(&self) -> &str {
        &self.blob.media_type
    }

    pub fn len(&self) -> usize {
        self.blob.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blob.contents.is_empty()
    }

    /// Revoke the URI and free the store entry
    pub fn release(self) {
        // Drop does the revoking.
    }
}

impl Drop for ArtifactHandle {
    fn drop(&mut self) {
        if self.store.revoke(&self.uri) {
            tracing::trace!(uri = %self.uri, "released artifact");
        }
    }
}

impl fmt::Debug for ArtifactHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactHandle")
            .field("uri", &self.uri)
            .field("media_type", &self.blob.media_type)
            .field("len", &self.blob.contents.len())
            .finish()
    }
}

impl fmt::Display for ArtifactHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}
