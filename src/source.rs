//! Source files submitted for cut path generation

use std::path::Path;

use bytes::Bytes;
use image::ImageFormat;

use crate::error::{Error, Result};

/// Media type used for SVG documents
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

/// A user-provided drawing, held in memory and never mutated
///
/// The client performs no validation of the contents: size limits and
/// format checks belong to the remote service.
#[derive(Debug, Clone)]
pub struct SourceFile {
    file_name: String,
    contents: Bytes,
    media_type: Option<String>,
}

impl SourceFile {
    /// Wrap in-memory bytes, guessing the media type from `file_name`
    pub fn from_bytes(file_name: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let media_type = guess_media_type(Path::new(&file_name)).map(str::to_string);
        Self {
            file_name,
            contents: contents.into(),
            media_type,
        }
    }

    /// Read a file from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path)
            .await
            .map_err(|source| Error::ReadSource {
                path: path.to_path_buf(),
                source,
            })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::from_bytes(file_name, contents))
    }

    /// Override the guessed media type
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &Bytes {
        &self.contents
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Guess a media type from a file extension
///
/// Raster formats come from `image`; SVG is recognized directly since
/// vector drawings are valid inputs too.
pub fn guess_media_type(path: &Path) -> Option<&'static str> {
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        return Some(SVG_MEDIA_TYPE);
    }

    ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_png() {
        assert_eq!(guess_media_type(Path::new("logo.PNG")), Some("image/png"));
    }

    #[test]
    fn test_guess_jpeg() {
        assert_eq!(guess_media_type(Path::new("photo.jpg")), Some("image/jpeg"));
    }

    #[test]
    fn test_guess_svg() {
        assert_eq!(guess_media_type(Path::new("shape.svg")), Some(SVG_MEDIA_TYPE));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(guess_media_type(Path::new("notes.xyz")), None);
        assert_eq!(guess_media_type(Path::new("no_extension")), None);
    }

    #[test]
    fn test_from_bytes() {
        let file = SourceFile::from_bytes("sticker.png", vec![1u8, 2, 3]);
        assert_eq!(file.file_name(), "sticker.png");
        assert_eq!(file.media_type(), Some("image/png"));
        assert_eq!(file.len(), 3);
        assert_eq!(file.contents().as_ref(), &[1, 2, 3]);
    }

    #[test]
    fn test_media_type_override() {
        let file = SourceFile::from_bytes("blob", Vec::new()).with_media_type("image/webp");
        assert_eq!(file.media_type(), Some("image/webp"));
        assert!(file.is_empty());
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let err = SourceFile::from_path("/definitely/not/here.png")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ReadSource { .. }));
    }
}
