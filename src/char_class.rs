//! Structural roles of Khmer code points.
//!
//! Every `char` maps to exactly one [`CodepointRole`]. The role sets are
//! fixed inclusive ranges that never overlap; anything outside them is
//! [`CodepointRole::Other`] and is never reordered.

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum CodepointRole {
    /// Consonant or independent vowel; the anchor of a syllable.
    Base,
    DependentVowel,
    /// U+17D2, the subscript marker.
    Coeng,
    DiacriticSpacing,
    DiacriticNonSpacing,
    RegisterShifter,
    Robat,
    ZeroWidth,
    Other,
}

pub const COENG: char = '\u{17D2}';
pub const RO: char = '\u{179A}';

/// Range table backing [`classify`]. Kept sorted by start.
pub const ROLE_TABLE: &[(char, char, CodepointRole)] = &[
    ('\u{1780}', '\u{17A2}', CodepointRole::Base), // consonants
    ('\u{17A3}', '\u{17B3}', CodepointRole::Base), // independent vowels
    ('\u{17B6}', '\u{17C5}', CodepointRole::DependentVowel),
    ('\u{17C6}', '\u{17C6}', CodepointRole::DiacriticNonSpacing),
    ('\u{17C7}', '\u{17C8}', CodepointRole::DiacriticSpacing),
    ('\u{17C9}', '\u{17CA}', CodepointRole::RegisterShifter),
    ('\u{17CB}', '\u{17CB}', CodepointRole::DiacriticNonSpacing),
    ('\u{17CC}', '\u{17CC}', CodepointRole::Robat),
    ('\u{17CD}', '\u{17D1}', CodepointRole::DiacriticNonSpacing),
    ('\u{17D2}', '\u{17D2}', CodepointRole::Coeng),
    ('\u{17DD}', '\u{17DD}', CodepointRole::DiacriticNonSpacing),
    ('\u{200B}', '\u{200D}', CodepointRole::ZeroWidth),
];

pub fn classify(c: char) -> CodepointRole {
    // Fast exit for everything below the Khmer block (ASCII and friends).
    if c < '\u{1780}' {
        return CodepointRole::Other;
    }
    for &(lo, hi, role) in ROLE_TABLE {
        if c < lo {
            break;
        }
        if c <= hi {
            return role;
        }
    }
    CodepointRole::Other
}

impl CodepointRole {
    /// Roles that may trail a base inside a syllable as a run of marks.
    pub fn is_mark(self) -> bool {
        matches!(
            self,
            CodepointRole::DependentVowel
                | CodepointRole::DiacriticSpacing
                | CodepointRole::DiacriticNonSpacing
                | CodepointRole::RegisterShifter
                | CodepointRole::Robat
                | CodepointRole::ZeroWidth
        )
    }
}

pub fn is_base(c: char) -> bool {
    classify(c) == CodepointRole::Base
}

pub fn is_zero_width(c: char) -> bool {
    classify(c) == CodepointRole::ZeroWidth
}
