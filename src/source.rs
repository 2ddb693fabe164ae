use std::path::Path;

use crate::error::ValidationError;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const MAX_SOURCE_BYTES: u64 = 50 * 1024 * 1024;

/// A file the user picked, as handed over by the caller.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, declaring its media type from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, media_type_for_path(path), bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn validate(&self, max_bytes: u64) -> Result<(), ValidationError> {
        validate(&self.media_type, self.size(), max_bytes)
    }
}

/// Checks the declared type and size. Nothing here looks at the content.
pub fn validate(media_type: &str, size: u64, max_bytes: u64) -> Result<(), ValidationError> {
    if !is_pdf_media_type(media_type) {
        return Err(ValidationError::NotPdf {
            media_type: media_type.to_string(),
        });
    }
    if size > max_bytes {
        return Err(ValidationError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    Ok(())
}

pub fn is_pdf_media_type(media_type: &str) -> bool {
    let essence = media_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case(PDF_MEDIA_TYPE)
}

pub fn media_type_for_path(path: &Path) -> &'static str {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_MEDIA_TYPE,
        _ => "application/octet-stream",
    }
}
