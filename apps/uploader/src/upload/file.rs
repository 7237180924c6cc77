//! Selected resume files and the extension filter applied at selection time.
//!
//! The filter mirrors a file picker's `accept=".pdf,.docx"` hint: it looks at the
//! name only and never inspects the bytes.

use std::path::Path;

use bytes::Bytes;

use crate::errors::UploadError;

pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A file chosen by the user: its display name and raw contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk after checking it passes the extension filter.
    pub async fn from_path(path: &Path) -> Result<Self, UploadError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        if !is_accepted(&file_name) {
            return Err(UploadError::InvalidFile(file_name));
        }

        let bytes = tokio::fs::read(path).await.map_err(|source| UploadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self::new(file_name, bytes))
    }

    /// MIME type sent with the multipart part, derived from the extension.
    pub fn mime_type(&self) -> &'static str {
        match extension(&self.file_name).as_deref() {
            Some("pdf") => PDF_MIME,
            Some("docx") => DOCX_MIME,
            _ => "application/octet-stream",
        }
    }
}

/// True when the name ends in `.pdf` or `.docx`, ignoring case.
pub fn is_accepted(file_name: &str) -> bool {
    extension(file_name)
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

fn extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}
