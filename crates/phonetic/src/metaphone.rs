//! Double Metaphone backed provider.

use std::panic::{AssertUnwindSafe, catch_unwind};

use pinyin::ToPinyin;
use rphonetic::{DoubleMetaphone, Encoder};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::PhoneticProvider;
use crate::error::PhoneticError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Latin,
    Han,
    Digit,
    Other,
}

fn script_of(c: char) -> Script {
    if c.is_ascii_alphabetic() {
        Script::Latin
    } else if c.to_pinyin().is_some() {
        Script::Han
    } else if c.is_numeric() {
        Script::Digit
    } else {
        Script::Other
    }
}

/// Splits `text` into maximal runs of the same script.
fn segments(text: &str) -> Vec<(Script, String)> {
    let mut out: Vec<(Script, String)> = Vec::new();
    for c in text.chars() {
        let script = script_of(c);
        match out.last_mut() {
            Some((last, run)) if *last == script => run.push(c),
            _ => out.push((script, c.to_string())),
        }
    }
    out
}

/// Romanizes Latin runs with Double Metaphone primary codes and Han runs
/// with toneless pinyin.
///
/// Diacritics are folded first (`Café` encodes like `Cafe`). Latin runs keep
/// their full code, not the usual four-code prefix: normalized names have no
/// spaces, so a whole multi-word name is a single run. Digit runs and runs in
/// other scripts pass through lowercased, so the key is total over any
/// normalized input.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaphoneProvider;

impl MetaphoneProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn encode_latin(run: &str) -> Result<String, PhoneticError> {
        let upper = run.to_uppercase();
        // Two codes per letter is the most Double Metaphone emits (`X` → `KS`).
        let encoder = DoubleMetaphone::new(upper.len().saturating_mul(2));
        let encoded = catch_unwind(AssertUnwindSafe(|| encoder.encode(&upper)))
            .map_err(|_| PhoneticError::Encoding {
                input: run.to_owned(),
                reason: "double metaphone panicked".to_owned(),
            })?;
        if encoded.is_empty() {
            // Runs made only of silent letters still need a stable key.
            return Ok(run.to_lowercase());
        }
        Ok(encoded.to_lowercase())
    }

    /// Same reading, same key: tones are dropped and syllables concatenated.
    fn romanize_han(run: &str) -> String {
        run.chars().filter_map(|c| c.to_pinyin()).map(|p| p.plain()).collect()
    }
}

impl PhoneticProvider for MetaphoneProvider {
    fn phoneticize(&self, normalized: &str) -> Result<String, PhoneticError> {
        let folded: String = normalized.nfkd().filter(|c| !is_combining_mark(*c)).collect();
        let mut key = String::with_capacity(folded.len());
        for (script, run) in segments(&folded) {
            match script {
                Script::Latin => key.push_str(&Self::encode_latin(&run)?),
                Script::Han => key.push_str(&Self::romanize_han(&run)),
                Script::Digit | Script::Other => key.push_str(&run.to_lowercase()),
            }
        }
        Ok(key)
    }
}
