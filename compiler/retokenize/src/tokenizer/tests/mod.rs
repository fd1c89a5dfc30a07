
use super::*;
use crate::pattern::Pattern;

/// Collect `(tag, text, index, length)` for each token, `None` tag for fallback
pub(super) fn summarize<'a>(
    tokenizer: &'a Tokenizer<&'static str>,
    source: &'a str,
) -> Vec<(Option<&'static str>, &'a str, usize, usize)> {
    tokenizer
        .tokenize(source)
        .map(|t| (t.tag().copied(), t.text, t.index, t.length))
        .collect()
}

pub(super) fn tokenizer(defs: Vec<(&'static str, Pattern)>) -> Tokenizer<&'static str> {
    Tokenizer::new(defs.into_iter().map(|(tag, pattern)| TokenDef::new(tag, pattern))).unwrap()
}
