//! Khmer text normalization for comparing OCR output with ground truth.

use unicode_normalization::UnicodeNormalization;

use crate::char_class::is_zero_width;
use crate::ligature::apply_ligatures;
use crate::reorder::reorder_syllable;
use crate::syllable::syllables;

/// Subscript ta is folded into subscript da; the two render alike.
const SUBSCRIPT_TA: &str = "\u{17D2}\u{178F}";
const SUBSCRIPT_DA: &str = "\u{17D2}\u{178A}";

/// Normalizes Khmer text into one canonical form.
///
/// 1. subscript ta is rewritten to subscript da,
/// 2. whitespace and zero-width marks are removed,
/// 3. every syllable is reordered and its vowel ligatures are applied,
/// 4. the result is NFC composed.
///
/// Empty input comes back empty. Never fails.
pub fn khmer_normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.replace(SUBSCRIPT_TA, SUBSCRIPT_DA);

    let cleaned: String = text
        .chars()
        .filter(|&c| !c.is_whitespace() && !is_zero_width(c))
        .collect();

    let mut reordered = String::with_capacity(cleaned.len());
    for syll in syllables(&cleaned) {
        reordered.push_str(&apply_ligatures(&reorder_syllable(syll)));
    }

    reordered.nfc().collect()
}

/// Same as [`khmer_normalize`], passing an absent value through.
pub fn khmer_normalize_opt(text: Option<&str>) -> Option<String> {
    text.map(khmer_normalize)
}

/// Stateless handle on [`khmer_normalize`], for callers that hold a
/// normalizer alongside other components.
#[derive(Debug, Default, Clone, Copy)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Normalizer
    }

    pub fn normalize(&self, text: &str) -> String {
        khmer_normalize(text)
    }
}
