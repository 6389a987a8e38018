//! Khmer text normalization for OCR evaluation.
//!
//! [`khmer_normalize`] puts Khmer syllables into one canonical mark order so
//! ground truth and OCR output compare equal when they differ only in how
//! the marks were typed. The [`metrics`] and [`eval`] modules build CER/WER
//! scoring on top of it.

pub mod char_class;
pub mod chunk;
pub mod config;
pub mod error;
pub mod eval;
pub mod kdict;
pub mod khmer_segmenter;
pub mod ligature;
pub mod metrics;
pub mod normalization;
pub mod reorder;
pub mod syllable;
pub mod tokenizer;
pub mod utils;

pub use char_class::{classify, CodepointRole};
pub use config::{EvalConfig, OutputFormat, TokenizerKind};
pub use error::{EvalError, Result};
pub use metrics::{character_error_rate, edit_distance, error_rate, word_error_rate};
pub use normalization::{khmer_normalize, khmer_normalize_opt, Normalizer};
pub use tokenizer::{SyllableTokenizer, Tokenizer};
