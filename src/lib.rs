//! Client for the resume-generation service.
//!
//! Two workflows end in a rendered resume: a manual profile form, or an
//! uploaded document followed by modification answers. Either result can
//! then be exported as a PDF.

pub mod core;
pub mod error;
pub mod orchestrator;
pub mod resume_cli;
pub mod types;
pub mod utils;

pub use error::ClientError;
pub use orchestrator::{Orchestrator, PageView, Session};
pub use types::{ExperienceEntry, FormFields, ResumeData, SelectedFile};
