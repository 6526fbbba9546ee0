/// Emoji filter — removes every run of emoji code points from text.
///
/// The range table in [`ranges`] is compiled once into a single regex
/// character class. Matching is per code point, not per grapheme cluster:
/// a zero-width joiner (U+200D) between two stripped pictographs survives.
pub mod ranges;

pub use ranges::{is_emoji, EMOJI_RANGES};

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Compiled matcher for the emoji range table.
#[derive(Debug, Clone)]
pub struct EmojiFilter {
    pattern: Regex,
}

impl EmojiFilter {
    /// Compile the range table into a matcher.
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = Regex::new(&ranges::character_class())?;
        Ok(Self { pattern })
    }

    /// Remove every maximal run of emoji from `text`.
    ///
    /// Returns `Cow::Borrowed` when nothing matched, so callers can tell
    /// "unchanged" apart from "changed" without comparing the strings.
    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, "")
    }
}

static DEFAULT_FILTER: LazyLock<EmojiFilter> =
    LazyLock::new(|| EmojiFilter::new().expect("emoji range table compiles"));

/// Strip emoji from `text` using the shared, lazily compiled filter.
pub fn strip_emoji(text: &str) -> Cow<'_, str> {
    DEFAULT_FILTER.strip(text)
}
