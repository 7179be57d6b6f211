use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";
pub const DEFAULT_VIDEO_MIME: &str = "video/mp4";

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unsupported image type: {0}")]
    UnsupportedImage(PathBuf),
    #[error("Image payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Image bytes carried as base64, displayable as a `data:` URL.
#[derive(Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub mime_type: String,
    pub data: String,
}

impl std::fmt::Debug for EmbeddedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedImage")
            .field("mime_type", &self.mime_type)
            .field("encoded_len", &self.data.len())
            .finish()
    }
}

impl EmbeddedImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    /// Accepts either a `data:<mime>;base64,<payload>` URL or a bare base64 payload.
    pub fn parse(reference: &str) -> Self {
        let reference = reference.trim();
        if let Some(rest) = reference.strip_prefix("data:") {
            if let Some((header, payload)) = rest.split_once(',') {
                let mime = header.split(';').next().unwrap_or_default();
                let mime = if mime.is_empty() {
                    DEFAULT_IMAGE_MIME
                } else {
                    mime
                };
                return Self::new(mime, payload);
            }
        }
        Self::new(DEFAULT_IMAGE_MIME, reference)
    }

    /// Reads a local image file, picking the mime type from its extension.
    pub fn from_file(path: &Path) -> Result<Self, MediaError> {
        let mime = mime_for_path(path).ok_or_else(|| MediaError::UnsupportedImage(path.into()))?;
        let bytes = fs::read(path).map_err(|source| MediaError::Io {
            path: path.into(),
            source,
        })?;
        Ok(Self::from_bytes(mime, &bytes))
    }

    /// The raw base64 payload, without any data-URL header.
    pub fn payload(&self) -> &str {
        &self.data
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    pub fn decode(&self) -> Result<Vec<u8>, MediaError> {
        Ok(STANDARD.decode(self.data.as_bytes())?)
    }

    /// Decoded size estimated from the base64 length.
    pub fn approx_size(&self) -> usize {
        let padding = self.data.bytes().rev().take_while(|&b| b == b'=').count();
        (self.data.len() / 4 * 3).saturating_sub(padding)
    }

    pub fn extension(&self) -> &'static str {
        extension_for_mime(&self.mime_type)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), MediaError> {
        let bytes = self.decode()?;
        write_file(path, &bytes)
    }
}

/// A downloaded video held in memory until the user saves it.
#[derive(Clone, PartialEq, Eq)]
pub struct VideoClip {
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub source_uri: String,
}

impl std::fmt::Debug for VideoClip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoClip")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .field("source_uri", &self.source_uri)
            .finish()
    }
}

impl VideoClip {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>, source_uri: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
            source_uri: source_uri.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn save_to(&self, path: &Path) -> Result<(), MediaError> {
        write_file(path, &self.bytes)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), MediaError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| MediaError::Io {
            path: parent.into(),
            source,
        })?;
    }
    fs::write(path, bytes).map_err(|source| MediaError::Io {
        path: path.into(),
        source,
    })
}

pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "jpg",
    }
}

/// Human readable byte count for the UI.
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let bytes = bytes as f64;
    if bytes >= KB * KB {
        format!("{:.1} MB", bytes / (KB * KB))
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_strips_data_url_prefix() {
        let image = EmbeddedImage::parse("data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.payload(), "iVBORw0KGgo=");
        assert_eq!(image.to_data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_parse_bare_payload() {
        let image = EmbeddedImage::parse("/9j/4AAQ");
        assert_eq!(image.mime_type, DEFAULT_IMAGE_MIME);
        assert_eq!(image.payload(), "/9j/4AAQ");
    }

    #[test]
    fn test_bytes_round_trip_and_size() {
        let image = EmbeddedImage::from_bytes("image/png", b"hello world");
        assert_eq!(image.decode().unwrap(), b"hello world");
        assert_eq!(image.approx_size(), 11);
    }

    #[test]
    fn test_from_file_detects_mime() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logo.PNG");
        fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let image = EmbeddedImage::from_file(&path).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.extension(), "png");
        assert_eq!(image.decode().unwrap(), vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hi").unwrap();

        assert!(matches!(
            EmbeddedImage::from_file(&path),
            Err(MediaError::UnsupportedImage(_))
        ));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("clip.mp4");
        let clip = VideoClip::new(DEFAULT_VIDEO_MIME, vec![1, 2, 3], "https://example/video");

        clip.save_to(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
