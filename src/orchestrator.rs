// src/orchestrator.rs
//! Session state and the four user-triggered handlers

use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::core::template_engine::{render_error, render_resume};
use crate::core::ResumeBackend;
use crate::error::{Action, ClientError};
use crate::types::{FormFields, ModificationRequest, ResumeData, SelectedFile};
use crate::utils::{extracted_text_preview, write_file_bytes};

pub const DEFAULT_DOWNLOAD_FILE_NAME: &str = "Generated_Resume.pdf";

const GENERATING_MESSAGE: &str = "Generating Resume...";
const PARSING_MESSAGE: &str = "Parsing your resume...";
const MODIFYING_MESSAGE: &str = "Applying modifications and generating new resume...";

/// Values carried between handlers
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub extracted_text: Option<String>,
    pub resume_data: Option<ResumeData>,
}

/// The page regions the handlers mutate
#[derive(Debug, Clone)]
pub struct PageView {
    pub results_html: String,
    pub download_visible: bool,
    pub profile_form_visible: bool,
    pub upload_section_visible: bool,
    pub modification_zone_visible: bool,
    pub parsed_text_preview: Option<String>,
    /// Blocking notifications, oldest first
    pub alerts: Vec<String>,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            results_html: String::new(),
            download_visible: false,
            profile_form_visible: true,
            upload_section_visible: true,
            modification_zone_visible: false,
            parsed_text_preview: None,
            alerts: Vec::new(),
        }
    }
}

impl PageView {
    fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("Alert: {}", message);
        self.alerts.push(message);
    }

    /// Alert-kind failures block; the rest replace the results region
    fn fail(&mut self, err: &ClientError) {
        if err.is_alert() {
            self.alert(err.to_string());
        } else {
            self.results_html = render_error(&err.to_string());
        }
    }
}

pub struct Orchestrator<B: ResumeBackend> {
    backend: B,
    session: Session,
    page: PageView,
    download_dir: PathBuf,
    download_file_name: String,
}

impl<B: ResumeBackend> Orchestrator<B> {
    pub fn new(backend: B, download_dir: PathBuf) -> Self {
        Self {
            backend,
            session: Session::default(),
            page: PageView::default(),
            download_dir,
            download_file_name: DEFAULT_DOWNLOAD_FILE_NAME.to_string(),
        }
    }

    pub fn with_download_file_name(mut self, name: impl Into<String>) -> Self {
        self.download_file_name = name.into();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn page(&self) -> &PageView {
        &self.page
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Drain blocking notifications raised since the last call
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.page.alerts)
    }

    pub fn download_path(&self) -> PathBuf {
        self.download_dir.join(&self.download_file_name)
    }

    /// Workflow 1: manual profile form submitted
    pub async fn submit_profile(&mut self, form_fields: FormFields) -> Result<(), ClientError> {
        info!("Submitting profile with {} fields", form_fields.len());
        self.page.results_html = GENERATING_MESSAGE.to_string();
        self.page.download_visible = false;

        let result = self.backend.generate_resume(&form_fields).await;
        self.finish_generation(result)
    }

    /// Workflow 2, step 1: document picked and upload clicked
    pub async fn upload_document(&mut self, file: Option<SelectedFile>) -> Result<(), ClientError> {
        let Some(file) = file else {
            let err = ClientError::NoFileSelected;
            self.page.fail(&err);
            return Err(err);
        };

        self.page.results_html = PARSING_MESSAGE.to_string();

        match self.backend.parse_document(&file).await {
            Ok(extracted_text) => {
                info!(
                    "Parsed {} into {} characters",
                    file.file_name,
                    extracted_text.chars().count()
                );
                self.page.profile_form_visible = false;
                self.page.upload_section_visible = false;
                self.page.modification_zone_visible = true;
                self.page.parsed_text_preview = Some(extracted_text_preview(&extracted_text));
                self.page.results_html.clear();
                self.session.extracted_text = Some(extracted_text);
                Ok(())
            }
            Err(e) => {
                error!("Document parsing failed: {:#}", e);
                let err = ClientError::Request {
                    action: Action::ParsePdf,
                    reason: ClientError::reason(&e),
                };
                self.page.fail(&err);
                Err(err)
            }
        }
    }

    /// Workflow 2, step 2: modification answers submitted
    pub async fn submit_modification(&mut self, answers: FormFields) -> Result<(), ClientError> {
        let Some(extracted_text) = self.session.extracted_text.clone() else {
            let err = ClientError::NoExtractedText;
            self.page.fail(&err);
            return Err(err);
        };

        let request = ModificationRequest {
            extracted_text,
            modification_instructions: answers,
        };

        info!(
            "Submitting {} modification answers",
            request.modification_instructions.len()
        );
        self.page.results_html = MODIFYING_MESSAGE.to_string();
        self.page.download_visible = false;

        let result = self.backend.generate_modified_resume(&request).await;
        self.finish_generation(result)
    }

    /// Export the current resume and save it to the download directory
    pub async fn download_resume(&mut self) -> Result<PathBuf, ClientError> {
        let Some(resume) = self.session.resume_data.as_ref() else {
            let err = ClientError::NoResumeData;
            self.page.fail(&err);
            return Err(err);
        };

        let path = self.download_path();
        let saved = match self.backend.export_document(resume).await {
            Ok(document) => save_document(&path, &document).await,
            Err(e) => Err(e),
        };

        match saved {
            Ok(()) => {
                info!("Saved exported resume to {}", path.display());
                Ok(path)
            }
            Err(e) => {
                error!("Export failed: {:#}", e);
                let err = ClientError::Download {
                    reason: ClientError::reason(&e),
                };
                self.page.fail(&err);
                Err(err)
            }
        }
    }

    /// Shared success/failure handling of both generation requests
    fn finish_generation(&mut self, result: anyhow::Result<ResumeData>) -> Result<(), ClientError> {
        let outcome = result.and_then(|resume| {
            let html = render_resume(&resume);
            self.session.resume_data = Some(resume);
            html
        });

        match outcome {
            Ok(html) => {
                self.page.results_html = html;
                self.page.download_visible = true;
                Ok(())
            }
            Err(e) => {
                error!("Resume generation failed: {:#}", e);
                let err = ClientError::Request {
                    action: Action::GenerateResume,
                    reason: ClientError::reason(&e),
                };
                self.page.fail(&err);
                Err(err)
            }
        }
    }
}

async fn save_document(path: &Path, document: &[u8]) -> anyhow::Result<()> {
    write_file_bytes(path, document).await
}
