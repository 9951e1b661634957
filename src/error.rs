// src/error.rs
use thiserror::Error;

/// Outcome of a failed user action. The Display text is what the user sees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Please select a PDF file to upload.")]
    NoFileSelected,
    #[error("No resume data to download.")]
    NoResumeData,
    #[error("Please upload a resume before requesting modifications.")]
    NoExtractedText,
    #[error("Error {action}: {reason}")]
    Request { action: Action, reason: String },
    #[error("Could not download PDF: {reason}")]
    Download { reason: String },
}

/// Remote step a request failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GenerateResume,
    ParsePdf,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::GenerateResume => write!(f, "generating resume"),
            Action::ParsePdf => write!(f, "parsing PDF"),
        }
    }
}

impl ClientError {
    /// Local precondition failures never reach the backend
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ClientError::NoFileSelected | ClientError::NoResumeData | ClientError::NoExtractedText
        )
    }

    /// Shown as a blocking notification rather than inline in the results
    pub fn is_alert(&self) -> bool {
        self.is_precondition() || matches!(self, ClientError::Download { .. })
    }

    /// Flatten an anyhow chain into the single line shown to the user
    pub(crate) fn reason(err: &anyhow::Error) -> String {
        format!("{:#}", err)
    }
}
