//! Vowel sequences that collapse into a single combined vowel.

/// Applied in order, each as a plain replace over the whole string.
pub const LIGATURES: &[(&str, &str)] = &[
    ("\u{17C1}\u{17B8}", "\u{17BE}"), // e + ii -> oe
    ("\u{17B8}\u{17C1}", "\u{17BE}"), // ii + e -> oe
    ("\u{17C1}\u{17B6}", "\u{17C4}"), // e + aa -> oo
];

pub fn apply_ligatures(syll: &str) -> String {
    let mut out = syll.to_string();
    for &(from, to) in LIGATURES {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_orders_of_e_ii_become_oe() {
        assert_eq!(apply_ligatures("ក\u{17C1}\u{17B8}"), "ក\u{17BE}");
        assert_eq!(apply_ligatures("ក\u{17B8}\u{17C1}"), "ក\u{17BE}");
    }

    #[test]
    fn e_aa_becomes_oo() {
        assert_eq!(apply_ligatures("ក\u{17C1}\u{17B6}"), "ក\u{17C4}");
    }

    #[test]
    fn replacements_are_not_rescanned() {
        // ii e aa: the second rule eats "ii e", leaving aa behind.
        assert_eq!(apply_ligatures("\u{17B8}\u{17C1}\u{17B6}"), "\u{17BE}\u{17B6}");
        // e ii e aa: the first rule wins, the third still sees "e aa".
        assert_eq!(apply_ligatures("\u{17C1}\u{17B8}\u{17C1}\u{17B6}"), "\u{17BE}\u{17C4}");
    }

    #[test]
    fn text_without_sequences_is_unchanged() {
        assert_eq!(apply_ligatures("ខ្មែរ"), "ខ្មែរ");
        assert_eq!(apply_ligatures(""), "");
    }
}
