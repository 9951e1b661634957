// src/types/resume_data.rs
//! Resume structures exchanged with the generation and export endpoints

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat mapping of form field names to values, sent as a JSON object
pub type FormFields = BTreeMap<String, String>;

// ===== Generated Resume =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<Vec<ExperienceEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default)]
    pub bullets: Option<Vec<String>>,
}

impl ResumeData {
    pub fn experience(&self) -> &[ExperienceEntry] {
        self.experience.as_deref().unwrap_or_default()
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }
}

impl ExperienceEntry {
    pub fn bullets(&self) -> &[String] {
        self.bullets.as_deref().unwrap_or_default()
    }
}

// ===== Uploaded Document =====

/// Document picked by the user for the upload workflow
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// MIME type announced in the multipart part
    pub fn content_type(&self) -> &'static str {
        match crate::utils::get_file_extension(&self.file_name).as_deref() {
            Some("pdf") => "application/pdf",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_fields_are_absent() {
        let data: ResumeData = serde_json::from_str(
            r#"{"name": null, "skills": ["Rust"], "experience": [{"title": "Engineer", "bullets": null}], "extra": 1}"#,
        )
        .unwrap();

        assert_eq!(data.name, None);
        assert_eq!(data.email, None);
        assert_eq!(data.skills(), ["Rust".to_string()]);
        assert_eq!(data.experience().len(), 1);
        assert_eq!(data.experience()[0].title.as_deref(), Some("Engineer"));
        assert!(data.experience()[0].bullets().is_empty());
    }

    #[test]
    fn test_empty_object_deserializes() {
        let data: ResumeData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, ResumeData::default());
        assert!(data.experience().is_empty());
        assert!(data.skills().is_empty());
    }

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(
            SelectedFile::new("cv.PDF", vec![]).content_type(),
            "application/pdf"
        );
        assert_eq!(
            SelectedFile::new("cv.docx", vec![]).content_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(
            SelectedFile::new("notes", vec![]).content_type(),
            "application/octet-stream"
        );
    }
}
