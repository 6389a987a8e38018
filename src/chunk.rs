//! Decomposition of a syllable's tail into typed chunks.

use crate::char_class::{classify, CodepointRole, COENG, RO};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// Coeng + base, with an optional trailing register shifter. A run of
    /// several coengs is stored as a single one.
    Subscript(String),
    /// A coeng run with no base after it, kept verbatim.
    DanglingCoeng(String),
    /// Any other single code point, tagged with its role.
    Mark(CodepointRole, char),
}

impl Chunk {
    pub fn push_to(&self, out: &mut String) {
        match self {
            Chunk::Subscript(s) | Chunk::DanglingCoeng(s) => out.push_str(s),
            Chunk::Mark(_, c) => out.push(*c),
        }
    }

    pub fn to_text(&self) -> String {
        let mut s = String::new();
        self.push_to(&mut s);
        s
    }

    /// True for the bare coeng + Ro group.
    pub fn is_coeng_ro(&self) -> bool {
        match self {
            Chunk::Subscript(s) => {
                let mut it = s.chars();
                it.next() == Some(COENG) && it.next() == Some(RO) && it.next().is_none()
            }
            _ => false,
        }
    }
}

pub fn decompose(tail: &str) -> Vec<Chunk> {
    let mut chunks = Vec::with_capacity(tail.chars().count());
    let mut iter = tail.chars().peekable();

    while let Some(c) = iter.next() {
        let role = classify(c);
        if role != CodepointRole::Coeng {
            chunks.push(Chunk::Mark(role, c));
            continue;
        }

        let mut run = String::new();
        run.push(c);
        while let Some(&next) = iter.peek() {
            if classify(next) != CodepointRole::Coeng {
                break;
            }
            run.push(next);
            iter.next();
        }

        match iter.peek() {
            Some(&sub) if classify(sub) == CodepointRole::Base => {
                iter.next();
                let mut group = String::with_capacity(9);
                group.push(COENG);
                group.push(sub);
                if let Some(&rs) = iter.peek() {
                    if classify(rs) == CodepointRole::RegisterShifter {
                        iter.next();
                        group.push(rs);
                    }
                }
                chunks.push(Chunk::Subscript(group));
            }
            _ => chunks.push(Chunk::DanglingCoeng(run)),
        }
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscript_then_vowel() {
        let chunks = decompose("\u{17D2}ម\u{17C2}");
        assert_eq!(
            chunks,
            vec![
                Chunk::Subscript("\u{17D2}ម".to_string()),
                Chunk::Mark(CodepointRole::DependentVowel, '\u{17C2}'),
            ]
        );
    }

    #[test]
    fn coeng_run_collapses_to_one() {
        let chunks = decompose("\u{17D2}\u{17D2}\u{17D2}ក");
        assert_eq!(chunks, vec![Chunk::Subscript("\u{17D2}ក".to_string())]);
    }

    #[test]
    fn register_shifter_sticks_to_subscript() {
        let chunks = decompose("\u{17D2}ប\u{17CA}\u{17C9}");
        assert_eq!(
            chunks,
            vec![
                Chunk::Subscript("\u{17D2}ប\u{17CA}".to_string()),
                Chunk::Mark(CodepointRole::RegisterShifter, '\u{17C9}'),
            ]
        );
    }

    #[test]
    fn dangling_coeng_is_kept_verbatim() {
        let chunks = decompose("\u{17B6}\u{17D2}\u{17D2}");
        assert_eq!(
            chunks,
            vec![
                Chunk::Mark(CodepointRole::DependentVowel, '\u{17B6}'),
                Chunk::DanglingCoeng("\u{17D2}\u{17D2}".to_string()),
            ]
        );
        let chunks = decompose("\u{17D2}a");
        assert_eq!(chunks[0], Chunk::DanglingCoeng("\u{17D2}".to_string()));
        assert_eq!(chunks[1], Chunk::Mark(CodepointRole::Other, 'a'));
    }

    #[test]
    fn coeng_ro_detection_is_exact() {
        assert!(Chunk::Subscript("\u{17D2}\u{179A}".into()).is_coeng_ro());
        assert!(!Chunk::Subscript("\u{17D2}\u{179A}\u{17C9}".into()).is_coeng_ro());
        assert!(!Chunk::Subscript("\u{17D2}ក".into()).is_coeng_ro());
        assert!(!Chunk::DanglingCoeng("\u{17D2}".into()).is_coeng_ro());
    }

    #[test]
    fn empty_tail() {
        assert!(decompose("").is_empty());
    }
}
