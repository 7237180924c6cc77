use thiserror::Error;

/// The only failure text ever placed into upload state.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to parse resume.";

/// Upload-level error type.
/// The cause is kept for logging; the user only ever sees `user_message()`.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file '{0}': expected .pdf or .docx")]
    InvalidFile(String),
}

impl UploadError {
    /// What the view shows for this failure. Upload failures are not distinguished.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Network(_) | UploadError::Status { .. } | UploadError::Decode(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }

    /// Short tag used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            UploadError::Network(_) => "network",
            UploadError::Status { .. } => "status",
            UploadError::Decode(_) => "decode",
            UploadError::Io { .. } => "io",
            UploadError::InvalidFile(_) => "invalid_file",
        }
    }
}
