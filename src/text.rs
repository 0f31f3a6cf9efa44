use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").unwrap();
    static ref PUNCT_RE: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// Collect the set of word tokens in `text`. Callers pass lowercased text;
/// this does not fold case itself.
pub fn words(text: &str) -> HashSet<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Remove punctuation from a single token, keeping word characters.
pub fn strip_punctuation(token: &str) -> String {
    PUNCT_RE.replace_all(token, "").into_owned()
}
