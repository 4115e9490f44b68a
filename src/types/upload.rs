//! Upload-side types: validated image payloads and the upload identifier.

use std::fmt;
use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{Result, TagLensError};

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// MIME type sent as the binary part's content type.
    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    /// Default file name for the multipart part.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image.jpg",
            ImageFormat::Png => "image.png",
        }
    }

    /// Detect the format from leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<ImageFormat> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(ImageFormat::Png)
        } else {
            None
        }
    }
}

/// A single image upload: validated bytes plus the metadata the
/// multipart request needs.
///
/// Construction is the validation gate — an `UploadRequest` only exists
/// for non-empty data in a recognized format, so the upload call never
/// starts with bytes that cannot be transmitted. Transient: created per
/// user action, consumed by the upload call.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    bytes: Bytes,
    format: ImageFormat,
    file_name: String,
}

impl UploadRequest {
    /// Validate raw bytes into an upload request, sniffing the format.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(TagLensError::InvalidImage("empty image data".into()));
        }
        let format = ImageFormat::sniff(&bytes).ok_or_else(|| {
            TagLensError::InvalidImage("unrecognized image format (expected JPEG or PNG)".into())
        })?;
        Ok(Self {
            bytes,
            file_name: format.default_file_name().to_string(),
            format,
        })
    }

    /// Read an image file and validate it into an upload request.
    ///
    /// The file's own name is kept as the multipart file name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| {
            TagLensError::InvalidImage(format!("failed to read {}: {e}", path.display()))
        })?;
        let mut request = Self::from_bytes(data)?;
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            request.file_name = name.to_string();
        }
        Ok(request)
    }

    /// Override the file name reported in the multipart part.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Opaque identifier returned by the upload endpoint.
///
/// Correlates the tag and color lookups to the uploaded image: both
/// follow-up requests are built from a `ContentId`, which only exists
/// once an upload response has been parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
