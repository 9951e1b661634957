// src/resume_cli.rs
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

use crate::core::template_engine::render_page;
use crate::core::{ClientConfig, ConfigOverrides, ResumeBackend, ServiceClient};
use crate::error::ClientError;
use crate::orchestrator::Orchestrator;
use crate::types::{FormFields, SelectedFile};
use crate::utils::{collect_fields, write_file_bytes};

#[derive(Parser)]
#[command(name = "resume-client")]
#[command(about = "Generate resumes through the resume service")]
pub struct ResumeCli {
    #[command(subcommand)]
    pub command: ResumeCommand,

    /// Base URL of the resume service
    #[arg(long, global = true, env = "RESUME_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Directory for the HTML preview and downloaded documents
    #[arg(long, global = true, env = "RESUME_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ResumeCommand {
    /// Generate a resume from profile fields
    Generate {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Export the generated resume as PDF
        #[arg(long)]
        download: bool,
    },
    /// Upload an existing resume and generate a modified version
    Modify {
        /// Resume document to upload
        file: Option<PathBuf>,
        /// Answer to a modification question
        #[arg(long = "answer", value_name = "KEY=VALUE")]
        answers: Vec<String>,
        /// Export the generated resume as PDF
        #[arg(long)]
        download: bool,
    },
}

/// Fields of the manual profile form
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub experience: Option<String>,
    #[arg(long)]
    pub skills: Option<String>,
    #[arg(long)]
    pub education: Option<String>,
    #[arg(long)]
    pub additional_info: Option<String>,
    /// Extra form field
    #[arg(long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,
    /// YAML or JSON file with form fields
    #[arg(long = "profile", value_name = "FILE")]
    pub profile_file: Option<PathBuf>,
}

impl ResumeCli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            service_url: self.service_url.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}

impl ProfileArgs {
    /// Profile file first, then named flags, then `--field` pairs
    pub async fn into_fields(self) -> Result<FormFields> {
        let mut fields = match &self.profile_file {
            Some(path) => read_profile_file(path).await?,
            None => FormFields::new(),
        };

        let named = [
            ("name", self.name),
            ("email", self.email),
            ("phone", self.phone),
            ("experience", self.experience),
            ("skills", self.skills),
            ("education", self.education),
            ("additional_info", self.additional_info),
        ];
        for (key, value) in named {
            if let Some(value) = value {
                fields.insert(key.to_string(), value);
            }
        }

        fields.extend(collect_fields(&self.fields)?);
        Ok(fields)
    }
}

/// Scalars become strings; nested values are rejected
async fn read_profile_file(path: &Path) -> Result<FormFields> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read profile file: {}", path.display()))?;

    let raw: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse profile file: {}", path.display()))?;

    raw.into_iter()
        .map(|(key, value)| {
            let value = match value {
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::Bool(b) => b.to_string(),
                serde_yaml::Value::Null => String::new(),
                _ => anyhow::bail!("Field '{}' must be a plain value", key),
            };
            Ok((key, value))
        })
        .collect()
}

pub async fn handle_resume_command(cli: ResumeCli, config: &ClientConfig) -> Result<ExitCode> {
    let client = ServiceClient::new(config.service_url.clone(), config.timeout)?;
    info!("Resume service: {}", client.base_url());

    let mut orchestrator = Orchestrator::new(client, config.output_dir.clone())
        .with_download_file_name(config.download_file_name.clone());

    let (outcome, download) = match cli.command {
        ResumeCommand::Generate { profile, download } => {
            let fields = profile.into_fields().await?;
            let outcome = orchestrator.submit_profile(fields).await;
            (outcome, download)
        }
        ResumeCommand::Modify {
            file,
            answers,
            download,
        } => {
            let answers = collect_fields(&answers)?;
            let selected = match file {
                Some(path) => Some(read_selected_file(&path).await?),
                None => None,
            };

            let mut outcome = orchestrator.upload_document(selected).await;
            if outcome.is_ok() {
                if let Some(preview) = &orchestrator.page().parsed_text_preview {
                    println!("{}", preview);
                }
                outcome = orchestrator.submit_modification(answers).await;
            }
            (outcome, download)
        }
    };

    report(&mut orchestrator, &outcome);

    if !orchestrator.page().results_html.is_empty() {
        let preview_path = config.preview_path();
        let page = render_page(&orchestrator.page().results_html);
        write_file_bytes(&preview_path, page.as_bytes()).await?;
        println!("Preview written to {}", preview_path.display());
    }

    if outcome.is_err() {
        return Ok(ExitCode::FAILURE);
    }

    if download {
        let saved = orchestrator.download_resume().await;
        report(&mut orchestrator, &saved);
        match saved {
            Ok(path) => println!("Resume saved to {}", path.display()),
            Err(_) => return Ok(ExitCode::FAILURE),
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn read_selected_file(path: &Path) -> Result<SelectedFile> {
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume.pdf")
        .to_string();

    Ok(SelectedFile::new(file_name, content))
}

/// Alerts and inline errors go to stderr, each exactly once
fn report<B: ResumeBackend, T>(
    orchestrator: &mut Orchestrator<B>,
    outcome: &Result<T, ClientError>,
) {
    for alert in orchestrator.take_alerts() {
        eprintln!("{}", alert);
    }
    if let Err(err) = outcome {
        if !err.is_alert() {
            eprintln!("{}", err);
        }
    }
}
