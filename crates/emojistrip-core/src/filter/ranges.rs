/// The fixed emoji range table.
///
/// Bounds are inclusive Unicode scalar values. The order and the overlap
/// between `U+24C2..=U+1F251` and the narrower blocks are kept as-is so the
/// compiled character class matches existing output byte for byte.

/// Inclusive `(low, high)` code-point intervals classified as emoji.
pub const EMOJI_RANGES: &[(char, char)] = &[
    ('\u{1F600}', '\u{1F64F}'), // emoticons
    ('\u{1F300}', '\u{1F5FF}'), // symbols & pictographs
    ('\u{1F680}', '\u{1F6FF}'), // transport & map
    ('\u{1F1E0}', '\u{1F1FF}'), // regional indicators (flags)
    ('\u{2702}', '\u{27B0}'),   // dingbats
    ('\u{24C2}', '\u{1F251}'),  // enclosed characters
    ('\u{1F900}', '\u{1F9FF}'), // supplemental symbols & pictographs
    ('\u{1FA70}', '\u{1FAFF}'), // symbols & pictographs extended-A
    ('\u{2600}', '\u{26FF}'),   // miscellaneous symbols
    ('\u{2300}', '\u{23FF}'),   // miscellaneous technical
];

/// Returns `true` if `c` falls inside any range of [`EMOJI_RANGES`].
#[inline]
pub fn is_emoji(c: char) -> bool {
    EMOJI_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Render the range table as a regex character class matching one or more
/// emoji, e.g. `[\x{1F600}-\x{1F64F}...]+`.
pub(crate) fn character_class() -> String {
    let mut pattern = String::with_capacity(2 + EMOJI_RANGES.len() * 20);
    pattern.push('[');
    for &(lo, hi) in EMOJI_RANGES {
        pattern.push_str(&format!("\\x{{{:X}}}-\\x{{{:X}}}", lo as u32, hi as u32));
    }
    pattern.push_str("]+");
    pattern
}
