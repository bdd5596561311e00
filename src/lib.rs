//! # cutpath-client
//!
//! Client for a remote cut path generator: upload a drawing, get back an
//! SVG cut path for laser or vinyl cutting.
//!
//! ## Features
//!
//! - **Generation**: POST a source image with an edge offset and a smoothing
//!   flag as `multipart/form-data` to `{base}/generate`
//! - **Artifacts**: every successful answer becomes a process-local
//!   `blob:` handle that the caller releases when done
//! - **Inspection**: summarize returned SVG documents (size, path count)
//!
//! ## Example
//!
//! ```rust,ignore
//! use cutpath_client::{ClientConfig, GenerationParams, SourceFile, VectorizeClient};
//!
//! let client = VectorizeClient::new(ClientConfig::new("http://localhost:8000")?);
//! let file = SourceFile::from_path("sticker.png").await?;
//! let handle = client.generate_vector_path(&file, GenerationParams::default()).await?;
//! std::fs::write("sticker.svg", handle.contents())?;
//! handle.release();
//! ```

pub mod artifact;
pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod source;
pub mod svg;

// Re-export commonly used items
pub use artifact::{ArtifactHandle, ArtifactStore};
pub use client::VectorizeClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use params::GenerationParams;
pub use source::SourceFile;
pub use svg::SvgSummary;
