// src/core/text/words.rs
use crate::models::WordStat;

const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// Strips the maximal run of punctuation from both ends of a token.
#[inline]
#[must_use]
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(PUNCTUATION)
}

/// True for one or more ASCII digits and nothing else.
#[inline]
#[must_use]
pub fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns the token as a word, or `None` when it is punctuation only or numeric.
fn as_word(token: &str) -> Option<&str> {
    let word = strip_punctuation(token);
    if word.is_empty() || is_number(word) {
        None
    } else {
        Some(word)
    }
}

/// Counts words across `lines` and their mean length in characters.
///
/// Tokens are split on whitespace, trimmed of surrounding punctuation, and
/// dropped if nothing is left or if they are purely numeric.
#[must_use]
pub fn compute<S: AsRef<str>>(lines: &[S]) -> WordStat {
    let mut word_count: u64 = 0;
    let mut total_length: u64 = 0;

    for word in lines
        .iter()
        .flat_map(|line| AsRef::<str>::as_ref(line).split_whitespace())
        .filter_map(as_word)
    {
        word_count = word_count.saturating_add(1);
        let length = u64::try_from(word.chars().count()).unwrap_or(u64::MAX);
        total_length = total_length.saturating_add(length);
    }

    WordStat::from_totals(word_count, total_length)
}
