//! Tweet text cleaning.

use regex::Regex;
use std::sync::LazyLock;

/// Links, mentions, hashtags and any character that is neither a word character nor whitespace.
static NOISE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|@\w+|#\w+|[^\w\s]").expect("noise pattern is valid"));
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Strip noise tokens from raw tweet text.
///
/// Removed tokens are replaced by a space so neighbouring words never merge,
/// whitespace runs are collapsed and the result is trimmed. Idempotent.
pub fn clean(text: &str) -> String {
    let stripped = NOISE_REGEX.replace_all(text, " ");
    WHITESPACE_REGEX
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}
