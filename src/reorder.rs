//! Canonical reordering of one syllable.
//!
//! Output order is base, register shifters, robats, subscripts, dependent
//! vowels, non-spacing then spacing diacritics. Each bucket keeps input order.

use crate::char_class::{is_base, CodepointRole};
use crate::chunk::{decompose, Chunk};

#[derive(Debug, Default)]
struct Buckets {
    register_shifters: Vec<Chunk>,
    robats: Vec<Chunk>,
    /// `None` marks a slot vacated by the coeng-Ro move.
    subscripts: Vec<Option<Chunk>>,
    vowels: Vec<Chunk>,
    non_spacing: Vec<Chunk>,
    spacing: Vec<Chunk>,
}

impl Buckets {
    fn fill(chunks: Vec<Chunk>) -> Self {
        let mut b = Buckets::default();
        for chunk in chunks {
            match chunk {
                Chunk::Subscript(_) | Chunk::DanglingCoeng(_) => b.subscripts.push(Some(chunk)),
                Chunk::Mark(role, _) => match role {
                    CodepointRole::DependentVowel => b.vowels.push(chunk),
                    CodepointRole::DiacriticNonSpacing => b.non_spacing.push(chunk),
                    CodepointRole::DiacriticSpacing => b.spacing.push(chunk),
                    CodepointRole::RegisterShifter => b.register_shifters.push(chunk),
                    CodepointRole::Robat => b.robats.push(chunk),
                    // No slot in the canonical order; dropped.
                    CodepointRole::Base
                    | CodepointRole::Coeng
                    | CodepointRole::ZeroWidth
                    | CodepointRole::Other => {}
                },
            }
        }
        b
    }

    /// Subscript Ro renders under the other subscripts of a stack, so every
    /// coeng-Ro group except the last entry moves to the end.
    fn move_coeng_ro_last(&mut self) {
        let n = self.subscripts.len();
        if n < 2 {
            return;
        }
        for i in 0..n - 1 {
            let is_ro = matches!(&self.subscripts[i], Some(c) if c.is_coeng_ro());
            if is_ro {
                let moved = self.subscripts[i].take();
                self.subscripts.push(moved);
            }
        }
    }

    fn into_ordered(self) -> impl Iterator<Item = Chunk> {
        self.register_shifters
            .into_iter()
            .chain(self.robats)
            .chain(self.subscripts.into_iter().flatten())
            .chain(self.vowels)
            .chain(self.non_spacing)
            .chain(self.spacing)
    }
}

/// Reorders one syllable into canonical form. Units that are a single code
/// point or do not start with a base come back unchanged.
pub fn reorder_syllable(syll: &str) -> String {
    let mut chars = syll.chars();
    let base = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };
    if chars.next().is_none() || !is_base(base) {
        return syll.to_string();
    }

    let mut buckets = Buckets::fill(decompose(&syll[base.len_utf8()..]));
    buckets.move_coeng_ro_last();

    let mut out = String::with_capacity(syll.len());
    out.push(base);
    let mut prev = base.to_string();
    for chunk in buckets.into_ordered() {
        let text = chunk.to_text();
        // Identical neighbours collapse, even when the repeat was intended.
        if text == prev {
            continue;
        }
        out.push_str(&text);
        prev = text;
    }
    out
}
