//! Word tokenization of already normalized text.

use crate::config::{EvalConfig, TokenizerKind};
use crate::error::{EvalError, Result};
use crate::kdict::WordDictionary;
use crate::khmer_segmenter::{KhmerSegmenter, SegmenterConfig};
use crate::syllable::syllables;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// One token per syllable, or per code point outside a syllable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyllableTokenizer;

impl Tokenizer for SyllableTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        syllables(text).map(str::to_string).collect()
    }
}

impl Tokenizer for KhmerSegmenter {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.segment(text)
    }
}

/// Builds the tokenizer selected by `config`, loading its dictionary if any.
pub fn build_tokenizer(config: &EvalConfig) -> Result<Box<dyn Tokenizer>> {
    match config.tokenizer {
        TokenizerKind::Syllable => Ok(Box::new(SyllableTokenizer)),
        TokenizerKind::Dictionary => {
            let path = config.dictionary_path.as_ref().ok_or_else(|| {
                EvalError::Config("dictionary tokenizer needs dictionary_path".to_string())
            })?;
            let dict = WordDictionary::load(path, config.default_cost)?;
            let seg_config = SegmenterConfig {
                unknown_cost: config.unknown_cost,
                enable_unknown_merging: config.enable_unknown_merging,
            };
            Ok(Box::new(KhmerSegmenter::new(dict, seg_config)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_tokens() {
        let tokens = SyllableTokenizer.tokenize("ខ្មែរ។");
        assert_eq!(tokens, vec!["ខ្មែ", "រ", "។"]);
        assert!(SyllableTokenizer.tokenize("").is_empty());
    }

    #[test]
    fn default_config_builds_syllable_tokenizer() {
        let tok = build_tokenizer(&EvalConfig::default()).unwrap();
        assert_eq!(tok.tokenize("កខ"), vec!["ក", "ខ"]);
    }

    #[test]
    fn missing_dictionary_file_is_an_error() {
        let config = EvalConfig {
            tokenizer: TokenizerKind::Dictionary,
            dictionary_path: Some("/nonexistent/words.txt".into()),
            ..EvalConfig::default()
        };
        assert!(matches!(build_tokenizer(&config), Err(EvalError::Io(_))));
    }
}
