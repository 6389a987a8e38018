use crate::kdict::WordDictionary;
use crate::syllable::syllable_len;
use crate::utils;

#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    pub unknown_cost: f32,
    pub enable_unknown_merging: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            unknown_cost: 20.0,
            enable_unknown_merging: true,
        }
    }
}

/// Dictionary-driven Khmer word segmenter.
///
/// Finds the cheapest split of the text into dictionary words, numbers,
/// separators and unknown syllables, then merges runs of unknown pieces.
/// Input is expected to be normalized already.
#[derive(Debug, Clone)]
pub struct KhmerSegmenter {
    dict: WordDictionary,
    config: SegmenterConfig,
}

#[derive(Clone, Copy)]
struct State {
    cost: f32,
    prev_idx: Option<usize>,
}

const NUMBER_COST: f32 = 1.0;
const SEPARATOR_COST: f32 = 0.1;
/// Extra cost for a lone Khmer mark that could not attach to anything.
const STRAY_MARK_PENALTY: f32 = 10.0;

impl KhmerSegmenter {
    pub fn new(dict: WordDictionary, config: SegmenterConfig) -> Self {
        Self { dict, config }
    }

    pub fn dictionary(&self) -> &WordDictionary {
        &self.dict
    }

    pub fn segment(&self, text: &str) -> Vec<String> {
        let n = text.len();
        if n == 0 {
            return Vec::new();
        }

        let mut dp = vec![State { cost: f32::INFINITY, prev_idx: None }; n + 1];
        dp[0].cost = 0.0;

        let relax = |dp: &mut [State], from: usize, to: usize, step: f32| {
            let new_cost = dp[from].cost + step;
            if to <= n && new_cost < dp[to].cost {
                dp[to].cost = new_cost;
                dp[to].prev_idx = Some(from);
            }
        };

        for (i, c) in text.char_indices() {
            if dp[i].cost.is_infinite() {
                continue;
            }
            let rest = &text[i..];

            if utils::is_digit_cp(c) {
                relax(&mut dp, i, i + utils::number_len(rest), NUMBER_COST);
            } else if utils::is_separator_cp(c) {
                relax(&mut dp, i, i + c.len_utf8(), SEPARATOR_COST);
            }

            // Dictionary words starting here
            let max_wl = self.dict.max_word_len();
            for (off, sub_c) in rest.char_indices() {
                let end = off + sub_c.len_utf8();
                if end > max_wl {
                    break;
                }
                if let Some(cost) = self.dict.cost(&rest[..end]) {
                    relax(&mut dp, i, i + end, cost);
                }
            }

            // Unknown cluster
            let cluster = if utils::is_khmer_char(c) { syllable_len(rest) } else { c.len_utf8() };
            let mut unk_cost = self.config.unknown_cost;
            if cluster == c.len_utf8()
                && utils::is_khmer_char(c)
                && !utils::is_valid_single_base_char(c)
            {
                unk_cost += STRAY_MARK_PENALTY;
            }
            relax(&mut dp, i, i + cluster, unk_cost);
        }

        // Every reachable offset has an unknown step, so the end is reachable.
        let mut segments: Vec<(usize, usize)> = Vec::with_capacity(n / 2);
        let mut curr = n;
        while curr > 0 {
            let prev = match dp[curr].prev_idx {
                Some(p) => p,
                None => return vec![text.to_string()],
            };
            segments.push((prev, curr));
            curr = prev;
        }
        segments.reverse();

        if self.config.enable_unknown_merging {
            segments = self.merge_unknown(text, segments);
        }

        segments.into_iter().map(|(s, e)| text[s..e].to_string()).collect()
    }

    fn is_known(&self, seg: &str) -> bool {
        let mut chars = seg.chars();
        if let (Some(first), None) = (chars.next(), chars.next()) {
            if utils::is_separator_cp(first)
                || utils::is_digit_cp(first)
                || utils::is_valid_single_base_char(first)
            {
                return true;
            }
        }
        utils::number_len(seg) == seg.len() || self.dict.contains(seg)
    }

    fn merge_unknown(&self, text: &str, segments: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
        let mut merged = Vec::with_capacity(segments.len());
        let mut unknown: Option<(usize, usize)> = None;

        for (start, end) in segments {
            if self.is_known(&text[start..end]) {
                if let Some(span) = unknown.take() {
                    merged.push(span);
                }
                merged.push((start, end));
            } else {
                unknown = match unknown {
                    Some((u_start, _)) => Some((u_start, end)),
                    None => Some((start, end)),
                };
            }
        }
        if let Some(span) = unknown {
            merged.push(span);
        }
        merged
    }
}
