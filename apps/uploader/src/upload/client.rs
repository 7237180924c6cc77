//! Parse Client — the outbound call to the resume parsing service.
//!
//! `UploadController` holds an `Arc<dyn ParseClient>`; the HTTP implementation is the
//! only one used at runtime, tests swap in scripted clients.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::errors::UploadError;
use crate::upload::file::SelectedFile;

/// Multipart field name the parsing service reads the upload from.
pub const FILE_FIELD: &str = "file";

#[async_trait]
pub trait ParseClient: Send + Sync {
    /// Sends one file and returns the decoded JSON body of a 2xx response.
    async fn parse(&self, file: &SelectedFile) -> Result<Value, UploadError>;
}

/// Posts the file as `multipart/form-data` to a fixed endpoint. No retries.
#[derive(Clone)]
pub struct HttpParseClient {
    client: Client,
    endpoint: Url,
}

impl HttpParseClient {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, UploadError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ParseClient for HttpParseClient {
    async fn parse(&self, file: &SelectedFile) -> Result<Value, UploadError> {
        // Bytes is refcounted, so the part shares the selected file's buffer
        let part = Part::stream_with_length(file.bytes.clone(), file.bytes.len() as u64)
            .file_name(file.file_name.clone())
            .mime_str(file.mime_type())?;
        let form = Form::new().part(FILE_FIELD, part);

        debug!(
            "POST {} ({}, {} bytes)",
            self.endpoint,
            file.file_name,
            file.bytes.len()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::test_support::{spawn_mock_server, unused_base_url};
    use axum::http::StatusCode;
    use serde_json::json;

    fn client_for(base_url: &str) -> HttpParseClient {
        let endpoint = Url::parse(base_url).unwrap().join("/parse_resume/").unwrap();
        HttpParseClient::new(endpoint, None).unwrap()
    }

    #[tokio::test]
    async fn test_sends_single_file_part_and_decodes_json() {
        let server = spawn_mock_server(
            StatusCode::OK,
            r#"{"name": "Jane Doe", "email": "jane@example.com"}"#,
        )
        .await;
        let file = SelectedFile::new("resume.pdf", b"%PDF-1.7".to_vec());

        let result = client_for(&server.base_url).parse(&file).await.unwrap();
        assert_eq!(result, json!({"name": "Jane Doe", "email": "jane@example.com"}));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        let parts = &requests[0];
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].field, "file");
        assert_eq!(parts[0].file_name.as_deref(), Some("resume.pdf"));
        assert_eq!(parts[0].content_type.as_deref(), Some("application/pdf"));
        assert_eq!(parts[0].bytes, b"%PDF-1.7");
    }

    #[tokio::test]
    async fn test_large_file_arrives_intact() {
        let server = spawn_mock_server(StatusCode::OK, "{}").await;
        let payload: Vec<u8> = (0..256 * 1024).map(|i| (i % 251) as u8).collect();
        let file = SelectedFile::new("long_resume.docx", payload.clone());

        client_for(&server.base_url).parse(&file).await.unwrap();

        let requests = server.requests();
        assert_eq!(requests[0][0].bytes, payload);
        assert_eq!(requests[0][0].file_name.as_deref(), Some("long_resume.docx"));
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let server = spawn_mock_server(StatusCode::INTERNAL_SERVER_ERROR, "kaboom").await;
        let file = SelectedFile::new("resume.docx", b"PK".to_vec());

        let err = client_for(&server.base_url).parse(&file).await.unwrap_err();
        match err {
            UploadError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "kaboom");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unsupported_format_rejection_is_status_error() {
        let server = spawn_mock_server(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "Unsupported file format"}"#,
        )
        .await;
        let file = SelectedFile::new("resume.pdf", b"%PDF".to_vec());

        let err = client_for(&server.base_url).parse(&file).await.unwrap_err();
        assert_eq!(err.kind(), "status");
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = spawn_mock_server(StatusCode::OK, "<html>not json</html>").await;
        let file = SelectedFile::new("resume.pdf", b"%PDF".to_vec());

        let err = client_for(&server.base_url).parse(&file).await.unwrap_err();
        assert_eq!(err.kind(), "decode");
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let file = SelectedFile::new("resume.pdf", b"%PDF".to_vec());

        let err = client_for(&unused_base_url()).parse(&file).await.unwrap_err();
        assert_eq!(err.kind(), "network");
    }
}
