//! Word/punctuation tokenizer.
//!
//! A token is either a maximal run of word characters or a single character that
//! is neither a word character nor whitespace. `"IL-6 (human)"` therefore yields
//! `["IL", "-", "6", "(", "human", ")"]`.
//!
//! Context truncation and the reported max context length both count tokens
//! through this module, so the two always agree.

/// Word characters: Unicode alphanumerics and `_`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split `text` into tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if is_word_char(c) {
            word_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = word_start.take() {
            tokens.push(&text[start..i]);
        }
        if !c.is_whitespace() {
            tokens.push(&text[i..i + c.len_utf8()]);
        }
    }
    if let Some(start) = word_start {
        tokens.push(&text[start..]);
    }

    tokens
}

/// Number of tokens in `text`.
pub fn count_tokens(text: &str) -> usize {
    tokenize(text).len()
}
