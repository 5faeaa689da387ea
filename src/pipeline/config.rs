// src/pipeline/config.rs
use crate::error::PipelineError;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_FOOTER_LABEL: &str = "Simple Attendance App";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%b %d, %Y at %H:%M";
pub const DEFAULT_FILE_DATE_FORMAT: &str = "%d-%m-%Y";
pub const DEFAULT_PDF_VERSION: &str = "1.7";

/// User-facing export settings. Every field has a default, so a config file
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    /// Text printed bottom-left on every page.
    pub footer_label: String,
    /// chrono format for the "Generated:" line.
    pub timestamp_format: String,
    /// chrono format for the report date and the suggested file name.
    pub file_date_format: String,
    pub pdf_version: String,
    /// Write a report even when the roster is empty.
    pub allow_empty_export: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            footer_label: DEFAULT_FOOTER_LABEL.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            file_date_format: DEFAULT_FILE_DATE_FORMAT.to_string(),
            pdf_version: DEFAULT_PDF_VERSION.to_string(),
            allow_empty_export: false,
        }
    }
}

impl ExportConfig {
    pub fn from_json(source: &str) -> Result<Self, PipelineError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&source)
    }

    /// Rejects values that would only fail later, mid-export.
    pub fn validate(&self) -> Result<(), PipelineError> {
        check_format("timestampFormat", &self.timestamp_format)?;
        check_format("fileDateFormat", &self.file_date_format)?;
        if !is_pdf_version(&self.pdf_version) {
            return Err(PipelineError::Config(format!(
                "pdfVersion '{}' is not of the form '1.N'",
                self.pdf_version
            )));
        }
        Ok(())
    }
}

fn check_format(field: &str, format: &str) -> Result<(), PipelineError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(PipelineError::Config(format!("{} '{}' is not a valid date format", field, format)));
    }
    Ok(())
}

fn is_pdf_version(version: &str) -> bool {
    match version.split_once('.') {
        Some((major, minor)) => {
            matches!(major, "1" | "2") && !minor.is_empty() && minor.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(ExportConfig::from_json("{}").unwrap(), ExportConfig::default());
    }

    #[test]
    fn fields_use_camel_case() {
        let config = ExportConfig::from_json(
            r#"{"footerLabel": "Room 12", "allowEmptyExport": true, "pdfVersion": "1.4"}"#,
        )
        .unwrap();
        assert_eq!(config.footer_label, "Room 12");
        assert!(config.allow_empty_export);
        assert_eq!(config.pdf_version, "1.4");
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn invalid_date_format_is_rejected() {
        let err = ExportConfig::from_json(r#"{"timestampFormat": "%Q"}"#).unwrap_err();
        assert!(matches!(err, PipelineError::Config(msg) if msg.contains("timestampFormat")));
    }

    #[test]
    fn malformed_pdf_version_is_rejected() {
        assert!(ExportConfig::from_json(r#"{"pdfVersion": "seven"}"#).is_err());
        assert!(ExportConfig::from_json(r#"{"pdfVersion": "1."}"#).is_err());
        assert!(ExportConfig::from_json(r#"{"pdfVersion": "2.0"}"#).is_ok());
    }
}
