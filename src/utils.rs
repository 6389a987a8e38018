use crate::char_class::{classify, CodepointRole};

pub fn is_khmer_char(cp: char) -> bool {
    (cp >= '\u{1780}' && cp <= '\u{17FF}') || (cp >= '\u{19E0}' && cp <= '\u{19FF}')
}

pub fn is_digit_cp(cp: char) -> bool {
    cp.is_ascii_digit() || ('\u{17E0}'..='\u{17E9}').contains(&cp)
}

pub fn is_separator_cp(cp: char) -> bool {
    // Khmer punctuation and the riel sign
    if ('\u{17D4}'..='\u{17DB}').contains(&cp) {
        return true;
    }
    if cp.is_ascii_punctuation() || cp.is_ascii_whitespace() {
        return true;
    }
    matches!(cp, '\u{00A0}' | '\u{00AB}' | '\u{00BB}' | '\u{00A3}' | '\u{00A5}' | '\u{02DD}')
        || ('\u{2000}'..='\u{206F}').contains(&cp) // general punctuation
        || ('\u{20A0}'..='\u{20CF}').contains(&cp) // currency symbols
}

/// A base may stand as a word by itself; a lone mark may not.
pub fn is_valid_single_base_char(cp: char) -> bool {
    classify(cp) == CodepointRole::Base
}

/// Byte length of the number at the start of `text`: digits, optionally
/// joined by `,` or `.` between digits. 0 if `text` does not start with one.
pub fn number_len(text: &str) -> usize {
    let mut iter = text.chars().peekable();
    match iter.peek() {
        Some(&c) if is_digit_cp(c) => {}
        _ => return 0,
    }

    let mut len = 0;
    while let Some(c) = iter.next() {
        if is_digit_cp(c) {
            len += c.len_utf8();
            continue;
        }
        if c == ',' || c == '.' {
            if let Some(&d) = iter.peek() {
                if is_digit_cp(d) {
                    len += c.len_utf8();
                    continue;
                }
            }
        }
        break;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(number_len("123abc"), 3);
        assert_eq!(number_len("1,000.50$"), "1,000.50".len());
        assert_eq!(number_len("១២៣"), "១២៣".len());
        assert_eq!(number_len("12."), 2);
        assert_eq!(number_len("abc"), 0);
        assert_eq!(number_len(""), 0);
    }

    #[test]
    fn separators() {
        assert!(is_separator_cp('។'));
        assert!(is_separator_cp('៛'));
        assert!(is_separator_cp('!'));
        assert!(is_separator_cp('«'));
        assert!(is_separator_cp('\u{2014}'));
        assert!(!is_separator_cp('ក'));
        assert!(!is_separator_cp('1'));
    }

    #[test]
    fn single_bases() {
        assert!(is_valid_single_base_char('ក'));
        assert!(is_valid_single_base_char('ឥ'));
        assert!(!is_valid_single_base_char('\u{17B6}'));
        assert!(is_khmer_char('\u{17B6}'));
        assert!(!is_khmer_char('a'));
    }
}
