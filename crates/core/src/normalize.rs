//! Character normalization for extracted slide text.
//!
//! PowerPoint text is full of typographic characters that do not survive a
//! trip through plain-text tooling: curly quotes, en dashes, ellipses and a
//! whole family of fixed-width spaces. The normalizer folds them into their
//! ASCII counterparts and leaves every other character alone.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Source character → replacement. Sources are pairwise distinct and no
/// replacement contains a source, so a single pass is idempotent.
const SUBSTITUTIONS: &[(char, &str)] = &[
    ('\u{2026}', "..."), // horizontal ellipsis
    ('\u{2013}', "-"),   // en dash
    // quote:
    ('\u{0060}', "'"),  // grave accent
    ('\u{00B4}', "'"),  // acute accent
    ('\u{2018}', "'"),  // left single quotation mark
    ('\u{2019}', "'"),  // right single quotation mark
    ('\u{201C}', "\""), // left double quotation mark
    ('\u{201D}', "\""), // right double quotation mark
    // line structure:
    ('\u{000B}', "\n"), // vertical tab, PowerPoint's soft line break
    // space separators:
    ('\u{00A0}', " "), // no-break space
    ('\u{1680}', " "), // ogham space mark
    ('\u{180E}', " "), // mongolian vowel separator
    ('\u{2000}', " "), // en quad
    ('\u{2001}', " "), // em quad
    ('\u{2002}', " "), // en space
    ('\u{2003}', " "), // em space
    ('\u{2004}', " "), // three-per-em space
    ('\u{2005}', " "), // four-per-em space
    ('\u{2006}', " "), // six-per-em space
    ('\u{2007}', " "), // figure space
    ('\u{2008}', " "), // punctuation space
    ('\u{2009}', " "), // thin space
    ('\u{200A}', " "), // hair space
    ('\u{202F}', " "), // narrow no-break space
    ('\u{205F}', " "), // medium mathematical space
    ('\u{3000}', " "), // ideographic space
];

static SUBSTITUTION_TABLE: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| SUBSTITUTIONS.iter().copied().collect());

/// Text that has been through [`TextNormalizer::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Folds non-portable typography into plain ASCII equivalents.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Apply the substitution table to every character of `text`.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let table = &*SUBSTITUTION_TABLE;
        let mut output = String::with_capacity(text.len());

        for c in text.chars() {
            match table.get(&c) {
                Some(replacement) => output.push_str(replacement),
                None => output.push(c),
            }
        }

        NormalizedText(output)
    }
}
