//! Splits cleaned text into Khmer syllables.
//!
//! A syllable starts at a base and keeps going while the next code points
//! form either a coeng run followed by a base, or a run of vowel and
//! diacritic marks. Anything else is its own one-char unit, so the units
//! always concatenate back to the input.

use crate::char_class::{classify, CodepointRole};

/// Byte length of the unit at the start of `text` (0 for an empty string).
pub fn syllable_len(text: &str) -> usize {
    let first = match text.chars().next() {
        Some(c) => c,
        None => return 0,
    };

    if classify(first) != CodepointRole::Base {
        return first.len_utf8();
    }

    let mut len = first.len_utf8();
    loop {
        let rest = &text[len..];
        let mut iter = rest.chars();
        let next_cp = match iter.next() {
            Some(c) => c,
            None => break,
        };

        match classify(next_cp) {
            CodepointRole::Coeng => {
                // One or more coengs, then a base is required.
                let mut run = next_cp.len_utf8();
                let mut sub = iter.next();
                while let Some(c) = sub {
                    if classify(c) != CodepointRole::Coeng {
                        break;
                    }
                    run += c.len_utf8();
                    sub = iter.next();
                }
                match sub {
                    Some(c) if classify(c) == CodepointRole::Base => {
                        len += run + c.len_utf8();
                    }
                    _ => break, // trailing coeng
                }
            }
            role if role.is_mark() => {
                len += next_cp.len_utf8();
            }
            _ => break,
        }
    }

    len
}

/// Lazy iterator over the syllables of a string. See [`syllables`].
#[derive(Debug, Clone)]
pub struct Syllables<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Syllables<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let len = syllable_len(self.rest);
        if len == 0 {
            return None;
        }
        let (unit, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(unit)
    }
}

pub fn syllables(text: &str) -> Syllables<'_> {
    Syllables { rest: text }
}
