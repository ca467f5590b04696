// Engine settings, loaded from a JSON file or falling back to defaults.
use serde::Deserialize;
use std::path::Path;

use crate::error::EngineError;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineSettings {
    /// Field delimiter of the delimited-text input/output (source sheets use
    /// semicolons).
    pub delimiter: char,
    /// Sheet name for the summary page of the XLSX export.
    pub summary_sheet: String,
    /// Sheet name for the detailed-rows page of the XLSX export.
    pub detail_sheet: String,
    /// File-name prefix for server-side snapshot exports.
    pub snapshot_prefix: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            delimiter: ';',
            summary_sheet: "Resumo".to_string(),
            detail_sheet: "Detalhado".to_string(),
            snapshot_prefix: "relatorio".to_string(),
        }
    }
}

impl EngineSettings {
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| EngineError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    pub fn delimiter_byte(&self) -> u8 {
        // Delimiters outside the ASCII range cannot be handed to the csv
        // crate; fall back to the semicolon default.
        if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            b';'
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.delimiter_byte(), b';');
        assert_eq!(settings.summary_sheet, "Resumo");
    }

    #[test]
    fn test_from_file_partial_override() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"delimiter": ",", "summary_sheet": "Summary"}}"#).unwrap();
        let settings = EngineSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.delimiter_byte(), b',');
        assert_eq!(settings.summary_sheet, "Summary");
        // Unspecified fields keep their defaults.
        assert_eq!(settings.detail_sheet, "Detalhado");
    }

    #[test]
    fn test_from_file_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            EngineSettings::from_file(file.path()),
            Err(EngineError::ConfigError(_))
        ));
    }

    #[test]
    fn test_non_ascii_delimiter_falls_back() {
        let settings = EngineSettings {
            delimiter: '·',
            ..EngineSettings::default()
        };
        assert_eq!(settings.delimiter_byte(), b';');
    }
}
