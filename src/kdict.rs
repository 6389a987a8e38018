//! Word list backing the dictionary segmenter.
//!
//! The file is plain UTF-8, one entry per line: `word` or `word<TAB>cost`.
//! Blank lines and lines starting with `#` are skipped. Words are normalized
//! on load so they line up with normalized input text.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{EvalError, Result};
use crate::normalization::khmer_normalize;

#[derive(Debug, Clone)]
pub struct WordDictionary {
    words: HashMap<String, f32>,
    /// Longest entry in bytes, bounding the lookahead of a lookup.
    max_word_len: usize,
}

impl WordDictionary {
    pub fn load(path: impl AsRef<Path>, default_cost: f32) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Err(EvalError::Dictionary(format!("{} is empty", path.display())));
        }
        // The file must not be modified while the map is alive; it is only
        // read within this call.
        let mmap = unsafe { Mmap::map(&file)? };
        let dict = Self::from_bytes(&mmap, default_cost)?;
        log::info!("Loaded {} dictionary words from {}", dict.len(), path.display());
        Ok(dict)
    }

    pub fn from_bytes(bytes: &[u8], default_cost: f32) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| EvalError::Dictionary(format!("not valid UTF-8: {}", e)))?;
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

        let mut dict = WordDictionary { words: HashMap::new(), max_word_len: 0 };
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, cost) = match line.split_once('\t') {
                Some((word, cost)) => {
                    let cost: f32 = cost.trim().parse().map_err(|_| {
                        EvalError::Dictionary(format!("line {}: bad cost {:?}", lineno + 1, cost))
                    })?;
                    (word, cost)
                }
                None => (line, default_cost),
            };
            dict.insert(word, cost);
        }

        if dict.is_empty() {
            return Err(EvalError::Dictionary("no words found".to_string()));
        }
        Ok(dict)
    }

    pub fn from_words<I, S>(words: I, default_cost: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = WordDictionary { words: HashMap::new(), max_word_len: 0 };
        for w in words {
            dict.insert(w.as_ref(), default_cost);
        }
        dict
    }

    fn insert(&mut self, word: &str, cost: f32) {
        let word = khmer_normalize(word);
        if word.is_empty() {
            return;
        }
        self.max_word_len = self.max_word_len.max(word.len());
        // Keep the cheapest cost when a word appears twice.
        let entry = self.words.entry(word).or_insert(cost);
        if cost < *entry {
            *entry = cost;
        }
    }

    pub fn cost(&self, word: &str) -> Option<f32> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
