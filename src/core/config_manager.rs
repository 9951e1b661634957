// src/core/config_manager.rs
//! Client configuration: config.yaml, then command line (flags or their env vars)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::orchestrator::DEFAULT_DOWNLOAD_FILE_NAME;
use crate::utils::resolve_path;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_OUTPUT_DIR: &str = "out";
pub const DEFAULT_PREVIEW_FILE_NAME: &str = "resume_preview.html";
pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// config.yaml section the values came from
    pub environment: String,
    pub service_url: String,
    pub output_dir: PathBuf,
    pub download_file_name: String,
    pub preview_file_name: String,
    pub timeout: Option<Duration>,
    pub log_file: Option<PathBuf>,
}

/// One environment section of config.yaml; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentSection {
    pub service_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub download_file_name: Option<String>,
    pub preview_file_name: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentSection,
    #[serde(default)]
    production: EnvironmentSection,
}

/// Command-line values that take precedence over everything else
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub service_url: Option<String>,
    pub output_dir: Option<PathBuf>,
}

pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from ./config.yaml; runs before logging is installed
    pub fn load(overrides: ConfigOverrides) -> Result<ClientConfig> {
        let environment = Self::get_environment();
        let section = Self::load_section(Path::new(CONFIG_FILE), &environment)?;

        Self::resolve(section, environment, overrides)
    }

    fn get_environment() -> String {
        std::env::var("RESUME_CLIENT_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Read the section for `environment`; a missing file yields defaults
    pub fn load_section(path: &Path, environment: &str) -> Result<EnvironmentSection> {
        if !path.exists() {
            return Ok(EnvironmentSection::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse_section(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn parse_section(content: &str, environment: &str) -> Result<EnvironmentSection> {
        let config_file: ConfigFile = serde_yaml::from_str(content)?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    /// Merge the layers: command line over file, defaults for the rest
    pub fn resolve(
        section: EnvironmentSection,
        environment: String,
        overrides: ConfigOverrides,
    ) -> Result<ClientConfig> {
        let service_url = overrides
            .service_url
            .or(section.service_url)
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

        let output_dir = overrides
            .output_dir
            .or(section.output_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let log_file = section
            .log_file
            .map(|path| resolve_path(&path))
            .transpose()?;

        Ok(ClientConfig {
            environment,
            service_url,
            output_dir: resolve_path(&output_dir)?,
            download_file_name: section
                .download_file_name
                .unwrap_or_else(|| DEFAULT_DOWNLOAD_FILE_NAME.to_string()),
            preview_file_name: section
                .preview_file_name
                .unwrap_or_else(|| DEFAULT_PREVIEW_FILE_NAME.to_string()),
            timeout: section.timeout_seconds.map(Duration::from_secs),
            log_file,
        })
    }
}

impl ClientConfig {
    pub fn preview_path(&self) -> PathBuf {
        self.output_dir.join(&self.preview_file_name)
    }
}
