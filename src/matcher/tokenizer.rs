// file: src/matcher/tokenizer.rs
// description: lowercase word tokenization for bag-of-words matching
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"\W+").expect("NON_WORD regex is valid");
}

/// Split text into lowercase word tokens. Runs of non-word characters are
/// separators; empty tokens are discarded, so punctuation-only and blank
/// input both yield an empty list.
pub fn tokenize(text: &str) -> Vec<String> {
    NON_WORD
        .split(&text.to_lowercase())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}
