// src/utils.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::types::FormFields;

/// Characters of extracted text shown before the modification questions
pub const PREVIEW_CHARS: usize = 250;

/// Preview line shown once a document has been parsed
pub fn extracted_text_preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("Extracted Text Preview:\n\"{}...\"", head)
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Split a `key=value` argument; the value may itself contain `=`
pub fn parse_key_value(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected key=value, got: {}", raw))?;

    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("Empty field name in: {}", raw);
    }

    Ok((key.to_string(), value.to_string()))
}

/// Collect repeated `key=value` arguments, later keys win
pub fn collect_fields(pairs: &[String]) -> Result<FormFields> {
    let mut fields = FormFields::new();
    for raw in pairs {
        let (key, value) = parse_key_value(raw)?;
        fields.insert(key, value);
    }
    Ok(fields)
}

/// Make a path absolute against the current working directory
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(current_dir.join(path))
    }
}

/// Ensure directory exists
pub async fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Write bytes, creating the parent directory first
pub async fn write_file_bytes(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent).await?;
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_to_250_chars() {
        let text = "a".repeat(300);
        let preview = extracted_text_preview(&text);
        assert_eq!(
            preview,
            format!("Extracted Text Preview:\n\"{}...\"", "a".repeat(250))
        );
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let text = "é".repeat(260);
        let preview = extracted_text_preview(&text);
        assert!(preview.contains(&"é".repeat(250)));
        assert!(!preview.contains(&"é".repeat(251)));
    }

    #[test]
    fn test_preview_short_text() {
        assert_eq!(
            extracted_text_preview("Jane Doe"),
            "Extracted Text Preview:\n\"Jane Doe...\""
        );
    }

    #[test]
    fn test_get_file_extension() {
        assert_eq!(get_file_extension("resume.PDF"), Some("pdf".to_string()));
        assert_eq!(get_file_extension("noext"), None);
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("target_role=Data Engineer").unwrap(),
            ("target_role".to_string(), "Data Engineer".to_string())
        );
        assert_eq!(
            parse_key_value("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_key_value("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
        assert!(parse_key_value("missing").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn test_collect_fields_later_wins() {
        let fields =
            collect_fields(&["tone=formal".to_string(), "tone=casual".to_string()]).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["tone"], "casual");
    }

    #[tokio::test]
    async fn test_write_file_bytes_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.pdf");
        write_file_bytes(&path, b"%PDF").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF");
    }
}
