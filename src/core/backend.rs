// src/core/backend.rs
//! The four remote operations the client depends on

use anyhow::Result;

use crate::types::{FormFields, ModificationRequest, ResumeData, SelectedFile};

/// Resume service as seen by the orchestrator.
///
/// `ServiceClient` talks HTTP; tests substitute canned responses.
#[allow(async_fn_in_trait)]
pub trait ResumeBackend {
    /// POST /generate_resume
    async fn generate_resume(&self, fields: &FormFields) -> Result<ResumeData>;

    /// POST /upload/pdf, returns the extracted text
    async fn parse_document(&self, file: &SelectedFile) -> Result<String>;

    /// POST /generate_modified_resume
    async fn generate_modified_resume(&self, request: &ModificationRequest) -> Result<ResumeData>;

    /// POST /export/pdf, returns the rendered document
    async fn export_document(&self, resume: &ResumeData) -> Result<Vec<u8>>;
}
