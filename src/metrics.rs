//! Character and word error rates over normalized text.

use crate::normalization::khmer_normalize;

/// Minimum number of single-element insertions, deletions and substitutions
/// turning `a` into `b`.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let m = short.len();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for (i, l) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, s) in short.iter().enumerate() {
            let cost = if l == s { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m]
}

/// 0.0 for identical sequences, otherwise the edit distance over the longer
/// length.
pub fn error_rate<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    if a == b {
        return 0.0;
    }
    let denom = a.len().max(b.len());
    edit_distance(a, b) as f64 / denom as f64
}

/// Character error rate between two raw strings, after normalizing both.
pub fn character_error_rate(gt: &str, ocr: &str) -> f64 {
    let gt: Vec<char> = khmer_normalize(gt).chars().collect();
    let ocr: Vec<char> = khmer_normalize(ocr).chars().collect();
    error_rate(&gt, &ocr)
}

/// Word error rate between two token sequences. Tokens are normalized again
/// and any that end up empty are dropped.
pub fn word_error_rate<S: AsRef<str>>(gt: &[S], ocr: &[S]) -> f64 {
    let norm = |tokens: &[S]| -> Vec<String> {
        tokens
            .iter()
            .map(|t| khmer_normalize(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect()
    };
    error_rate(&norm(gt), &norm(ocr))
}
