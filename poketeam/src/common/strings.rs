/// Measures the width of a string as the team builder displays it.
///
/// Every UTF-16 code unit above U+00FF counts as 2 and every other code unit counts as 1, so
/// full-width Japanese text is twice as wide as ASCII.
pub fn display_width(s: &str) -> usize {
    s.encode_utf16()
        .map(|unit| if unit > 0xff { 2 } else { 1 })
        .sum()
}

/// Truncates a string to at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod strings_test {
    use crate::common::{
        display_width,
        truncate_chars,
    };

    #[test]
    fn counts_ascii_as_one() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("Garchomp"), 8);
        assert_eq!(display_width("é"), 1);
    }

    #[test]
    fn counts_full_width_as_two() {
        assert_eq!(display_width("ガブリアス"), 10);
        assert_eq!(display_width("ガブ12"), 6);
    }

    #[test]
    fn counts_each_surrogate_of_astral_characters() {
        assert_eq!(display_width("🐉"), 4);
    }

    #[test]
    fn truncates_on_character_boundaries() {
        assert_eq!(truncate_chars("マイパーティ", 3), "マイパ");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
