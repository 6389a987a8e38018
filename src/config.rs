use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// One token per syllable.
    #[default]
    Syllable,
    /// Dictionary-driven word segmentation; needs `dictionary_path`.
    Dictionary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Jsonl,
}

/// Settings for a CER/WER evaluation run. Every field has a default, so a
/// JSON config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub name_column: String,
    pub gt_column: String,
    pub ocr_column: String,
    /// Joins tokens in the `*_segmented` output columns.
    pub separator: String,
    pub threads: usize,
    pub limit: Option<usize>,
    pub tokenizer: TokenizerKind,
    pub dictionary_path: Option<PathBuf>,
    /// Cost of a dictionary word listed without one.
    pub default_cost: f32,
    /// Cost of a cluster the dictionary does not know.
    pub unknown_cost: f32,
    pub enable_normalization: bool,
    pub enable_unknown_merging: bool,
    pub output_format: OutputFormat,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            name_column: "name".to_string(),
            gt_column: "gt".to_string(),
            ocr_column: "ocr".to_string(),
            separator: " | ".to_string(),
            threads: 4,
            limit: None,
            tokenizer: TokenizerKind::Syllable,
            dictionary_path: None,
            default_cost: 10.0,
            unknown_cost: 20.0,
            enable_normalization: true,
            enable_unknown_merging: true,
            output_format: OutputFormat::Csv,
        }
    }
}

impl EvalConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let config: EvalConfig = serde_json::from_reader(BufReader::new(file))?;
        log::debug!("Loaded config from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(EvalError::Config("threads must be at least 1".to_string()));
        }
        if self.gt_column.is_empty() || self.ocr_column.is_empty() {
            return Err(EvalError::Config("column names must not be empty".to_string()));
        }
        if self.tokenizer == TokenizerKind::Dictionary && self.dictionary_path.is_none() {
            return Err(EvalError::Config(
                "dictionary tokenizer needs dictionary_path".to_string(),
            ));
        }
        if !(self.default_cost > 0.0 && self.unknown_cost > 0.0) {
            return Err(EvalError::Config("costs must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EvalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gt_column, "gt");
        assert_eq!(config.separator, " | ");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: EvalConfig =
            serde_json::from_str(r#"{"gt_column": "truth", "output_format": "jsonl"}"#).unwrap();
        assert_eq!(config.gt_column, "truth");
        assert_eq!(config.ocr_column, "ocr");
        assert_eq!(config.output_format, OutputFormat::Jsonl);
        assert_eq!(config.threads, 4);
    }

    #[test]
    fn rejects_zero_threads() {
        let config = EvalConfig { threads: 0, ..EvalConfig::default() };
        assert!(matches!(config.validate(), Err(EvalError::Config(_))));
    }

    #[test]
    fn dictionary_tokenizer_needs_a_path() {
        let config = EvalConfig { tokenizer: TokenizerKind::Dictionary, ..EvalConfig::default() };
        assert!(config.validate().is_err());
    }
}
