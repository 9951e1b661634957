// src/core/template_engine.rs
//! HTML preview of a generated resume

use anyhow::{Context, Result};
use askama::Template;

use crate::types::{ExperienceEntry, ResumeData};

pub const NAME_FALLBACK: &str = "Name not found";
pub const SUMMARY_FALLBACK: &str = "Not generated.";
pub const EDUCATION_FALLBACK: &str = "Not found.";

// ===== Template Models =====

#[derive(Template)]
#[template(path = "resume_preview.html")]
struct ResumePreview<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    summary: &'a str,
    experience: Vec<ExperienceView<'a>>,
    education: &'a str,
    skills: String,
}

struct ExperienceView<'a> {
    title: &'a str,
    company: &'a str,
    dates: &'a str,
    bullets: Vec<&'a str>,
}

#[derive(Template)]
#[template(source = r#"<p style="color:red;">{{ message }}</p>"#, ext = "html")]
struct InlineError<'a> {
    message: &'a str,
}

fn or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().unwrap_or(fallback)
}

impl<'a> From<&'a ExperienceEntry> for ExperienceView<'a> {
    fn from(job: &'a ExperienceEntry) -> Self {
        Self {
            title: or(&job.title, ""),
            company: or(&job.company, ""),
            dates: or(&job.dates, ""),
            bullets: job.bullets().iter().map(String::as_str).collect(),
        }
    }
}

// ===== Rendering =====

/// Render the results fragment; absent fields fall back instead of failing
pub fn render_resume(data: &ResumeData) -> Result<String> {
    let preview = ResumePreview {
        name: or(&data.name, NAME_FALLBACK),
        email: or(&data.email, ""),
        phone: or(&data.phone, ""),
        summary: or(&data.summary, SUMMARY_FALLBACK),
        experience: data.experience().iter().map(ExperienceView::from).collect(),
        education: or(&data.education, EDUCATION_FALLBACK),
        skills: data.skills().join(", "),
    };

    preview.render().context("Failed to render resume preview")
}

/// Inline error paragraph shown in the results region
pub fn render_error(message: &str) -> String {
    let fragment = InlineError { message };
    fragment
        .render()
        .unwrap_or_else(|_| format!("<p>{}</p>", message))
}

/// Standalone page wrapping a fragment, written to disk by the CLI
pub fn render_page(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Resume Preview</title></head>\n<body>\n<div id=\"resumeContainer\">\n{}\n</div>\n</body>\n</html>\n",
        fragment
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_resume() -> ResumeData {
        ResumeData {
            name: Some("Grace Hopper".to_string()),
            email: Some("grace@navy.mil".to_string()),
            phone: Some("555-0100".to_string()),
            summary: Some("Compiler pioneer.".to_string()),
            education: Some("PhD Mathematics, Yale".to_string()),
            skills: Some(vec!["COBOL".to_string(), "Leadership".to_string()]),
            experience: Some(vec![
                ExperienceEntry {
                    title: Some("Rear Admiral".to_string()),
                    company: Some("US Navy".to_string()),
                    dates: Some("1943-1986".to_string()),
                    bullets: Some(vec![
                        "Standardized COBOL".to_string(),
                        "Taught programming".to_string(),
                    ]),
                },
                ExperienceEntry {
                    title: Some("Senior Mathematician".to_string()),
                    company: Some("Eckert-Mauchly".to_string()),
                    dates: Some("1949-1952".to_string()),
                    bullets: Some(vec!["Built the A-0 compiler".to_string()]),
                },
            ]),
        }
    }

    #[test]
    fn test_full_resume_renders_every_section() {
        let html = render_resume(&full_resume()).unwrap();

        assert!(html.contains("<h3>Grace Hopper</h3>"));
        assert!(html.contains("grace@navy.mil | 555-0100"));
        assert!(html.contains("<p>Compiler pioneer.</p>"));
        assert!(html.contains("<p>PhD Mathematics, Yale</p>"));
        assert!(html.contains("<p>COBOL, Leadership</p>"));
        assert!(html.contains(
            "<ul><li>Standardized COBOL</li><li>Taught programming</li></ul>"
        ));
        assert!(html.contains("<ul><li>Built the A-0 compiler</li></ul>"));
    }

    #[test]
    fn test_experience_keeps_input_order() {
        let html = render_resume(&full_resume()).unwrap();

        let first = html.find("<h4>Rear Admiral at US Navy (1943-1986)</h4>").unwrap();
        let second = html
            .find("<h4>Senior Mathematician at Eckert-Mauchly (1949-1952)</h4>")
            .unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_missing_fields_use_fallbacks() {
        let html = render_resume(&ResumeData::default()).unwrap();

        assert!(html.contains("<h3>Name not found</h3>"));
        assert!(html.contains("<p> | </p>"));
        assert!(html.contains("<p>Not generated.</p>"));
        assert!(html.contains("<p>Not found.</p>"));
        assert!(html.contains("<p></p>"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_partial_experience_entry() {
        let data = ResumeData {
            experience: Some(vec![ExperienceEntry {
                title: Some("Intern".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let html = render_resume(&data).unwrap();

        assert!(html.contains("<h4>Intern at  ()</h4>"));
        assert!(html.contains("<ul></ul>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let data = ResumeData {
            name: Some(r#"<script>O'Brien & "x"</script>"#.to_string()),
            ..Default::default()
        };
        let html = render_resume(&data).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&#60;script&#62;"));
        assert!(html.contains("&#38;"));
    }

    #[test]
    fn test_render_error_paragraph() {
        let html = render_error("Error generating resume: Server error 500");
        assert_eq!(
            html,
            r#"<p style="color:red;">Error generating resume: Server error 500</p>"#
        );
    }
}
