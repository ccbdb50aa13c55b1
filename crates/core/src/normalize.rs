//! Text normalization for report notes.
//!
//! Notes are typed by hand into a spreadsheet, so they arrive with curly
//! quotes, compatibility characters, stray tabs and Windows line endings.
//! Both the sentiment scorer and the keyword extractor see text through
//! this normalizer first.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Regex to collapse multiple whitespace characters into one.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Terms are runs of two or more word characters.
static TERM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?u)\b\w\w+\b").unwrap());

/// Apostrophe-like characters, folded to `'`.
const APOSTROPHE_CHARS: &[char] = &['\u{2019}', '\u{2018}', '\u{02BC}', '`'];

/// Double-quote-like characters, folded to `"`.
const QUOTE_CHARS: &[char] = &['\u{201C}', '\u{201D}', '\u{201E}', '«', '»'];

/// Text normalizer for free-text notes.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    /// Whether to preserve original line breaks.
    preserve_line_breaks: bool,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Create a normalizer that keeps line breaks.
    pub fn new() -> Self {
        Self {
            preserve_line_breaks: true,
        }
    }

    /// Set whether to preserve original line breaks.
    pub fn with_preserve_line_breaks(mut self, preserve: bool) -> Self {
        self.preserve_line_breaks = preserve;
        self
    }

    /// Normalize a note.
    ///
    /// - Applies Unicode NFKC (full-width letters, ligatures)
    /// - Folds curly apostrophes and quotes to ASCII
    /// - Collapses runs of spaces and tabs, trims each line
    ///
    /// Case and punctuation are kept: the sentiment scorer reads both.
    pub fn normalize(&self, text: &str) -> String {
        let unified = text.replace("\r\n", "\n").replace('\r', "\n");

        let folded: String = unified
            .nfkc()
            .map(|c| {
                if APOSTROPHE_CHARS.contains(&c) {
                    '\''
                } else if QUOTE_CHARS.contains(&c) {
                    '"'
                } else {
                    c
                }
            })
            .collect();

        if self.preserve_line_breaks {
            folded
                .lines()
                .map(|line| WHITESPACE_COLLAPSE_REGEX.replace_all(line, " ").trim().to_string())
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            let single_line = folded.replace('\n', " ");
            WHITESPACE_COLLAPSE_REGEX
                .replace_all(&single_line, " ")
                .trim()
                .to_string()
        }
    }

    /// Split a note into lowercased terms for frequency counting.
    pub fn terms(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize(text).to_lowercase();

        TERM_REGEX
            .find_iter(&normalized)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
