// src/core/service_client.rs
//! HTTP client for the resume service - JSON everywhere except the document upload

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use std::time::Duration;
use tracing::{debug, error, info, trace};

use crate::core::backend::ResumeBackend;
use crate::types::{
    FormFields, ModificationRequest, ResumeData, SelectedFile, UploadResponse,
};

pub const GENERATE_RESUME_ENDPOINT: &str = "/generate_resume";
pub const UPLOAD_PDF_ENDPOINT: &str = "/upload/pdf";
pub const GENERATE_MODIFIED_ENDPOINT: &str = "/generate_modified_resume";
pub const EXPORT_PDF_ENDPOINT: &str = "/export/pdf";

pub const UPLOAD_FIELD_NAME: &str = "file";

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create new service client; `timeout` of `None` waits indefinitely
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Generic POST request with JSON
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let url = self.url(endpoint);
        info!("Calling resume service: {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        let response = Self::check_status(response).await?;
        response
            .json::<R>()
            .await
            .context("Failed to parse JSON response")
    }

    /// Non-2xx responses become errors carrying status and body text
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        trace!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        error!("Resume service error response {}: {}", status, error_text);
        anyhow::bail!("Server error {}: {}", status, error_text)
    }
}

impl ResumeBackend for ServiceClient {
    async fn generate_resume(&self, fields: &FormFields) -> Result<ResumeData> {
        self.post_json(GENERATE_RESUME_ENDPOINT, fields).await
    }

    async fn parse_document(&self, file: &SelectedFile) -> Result<String> {
        let url = self.url(UPLOAD_PDF_ENDPOINT);

        let form = Form::new().part(
            UPLOAD_FIELD_NAME,
            Part::bytes(file.content.clone())
                .file_name(file.file_name.clone())
                .mime_str(file.content_type())
                .context("Failed to create multipart")?,
        );

        info!(
            "Uploading {} ({} bytes) to {}",
            file.file_name,
            file.content.len(),
            url
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("HTTP request failed")?;

        let response = Self::check_status(response).await?;
        let upload: UploadResponse = response
            .json()
            .await
            .context("Failed to parse upload response")?;

        debug!("Extracted {} characters", upload.extracted_text.chars().count());
        Ok(upload.extracted_text)
    }

    async fn generate_modified_resume(&self, request: &ModificationRequest) -> Result<ResumeData> {
        self.post_json(GENERATE_MODIFIED_ENDPOINT, request).await
    }

    async fn export_document(&self, resume: &ResumeData) -> Result<Vec<u8>> {
        let url = self.url(EXPORT_PDF_ENDPOINT);
        info!("Requesting document export: {}", url);

        let response = self
            .client
            .post(&url)
            .json(resume)
            .send()
            .await
            .context("Failed to call export service")?;

        let response = Self::check_status(response).await?;
        let bytes = response
            .bytes()
            .await
            .context("Failed to read exported document")?;

        debug!("Received {} bytes of exported document", bytes.len());
        Ok(bytes.to_vec())
    }
}
