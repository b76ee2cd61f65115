//! Name normalization: strips punctuation, symbols and separators.

use regex::Regex;
use std::sync::LazyLock;

/// Unicode punctuation (P*), symbols (S*), separators (Z*) and any other
/// whitespace such as tabs and newlines.
static STRIPPED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}\p{S}\p{Z}\s]+").unwrap());

/// Removes every punctuation, symbol and whitespace code point from `s`.
///
/// Remaining code points keep their relative order. Case is left untouched,
/// so `"Water Jutsu"` becomes `"WaterJutsu"`, not `"waterjutsu"`.
#[must_use]
pub fn normalize(s: &str) -> String {
    STRIPPED_CHARS.replace_all(s, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_ascii_punctuation_and_spaces() {
        assert_eq!(normalize("Fire-Style"), "FireStyle");
        assert_eq!(normalize("Fire Style!"), "FireStyle");
        assert_eq!(normalize("  a.b,c;d  "), "abcd");
    }

    #[test]
    fn keeps_case() {
        assert_eq!(normalize("Water Jutsu"), "WaterJutsu");
        assert_ne!(normalize("water jutsu"), normalize("Water Jutsu"));
    }

    #[test]
    fn strips_unicode_punctuation_and_symbols() {
        assert_eq!(normalize("火遁・豪火球之术！"), "火遁豪火球之术");
        assert_eq!(normalize("《千鸟》"), "千鸟");
        assert_eq!(normalize("Rasengan™ ★ +1"), "Rasengan1");
        assert_eq!(normalize("a\u{3000}b\u{00a0}c"), "abc");
    }

    #[test]
    fn strips_control_whitespace() {
        assert_eq!(normalize("line\none\ttab\r\n"), "lineonetab");
    }

    #[test]
    fn keeps_digits_letters_and_marks() {
        assert_eq!(normalize("Café 2"), "Café2");
        assert_eq!(normalize("e\u{0301}"), "e\u{0301}");
    }

    #[test]
    fn empty_and_all_stripped_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!?-- ..."), "");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize("Shadow-Clone (Jutsu)!");
        assert_eq!(normalize(&once), once);
    }
}
