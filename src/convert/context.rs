//! Context assembly from question snippets.

use std::collections::HashSet;

use crate::domain::Snippet;
use crate::text::count_tokens;

/// A context built from snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledContext {
    /// Accepted snippet texts joined with a single space, original case.
    pub text: String,
    /// True if a snippet was dropped because it would exceed the token limit.
    pub truncated: bool,
    /// Tokens across the accepted snippets.
    pub token_count: usize,
}

/// Concatenate unique snippets in order until the token limit would be exceeded.
///
/// Exact duplicate texts are skipped without counting their tokens. The snippet
/// that pushes the running count past `token_limit` is excluded entirely and no
/// further snippets are considered. Reaching the limit exactly is not truncation.
pub fn assemble_context(snippets: &[Snippet], token_limit: usize) -> AssembledContext {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut accepted: Vec<&str> = Vec::new();
    let mut token_count = 0;
    let mut truncated = false;

    for snippet in snippets {
        let text = snippet.text.as_str();
        if !seen.insert(text) {
            continue;
        }

        let tokens = count_tokens(text);
        if token_count + tokens > token_limit {
            truncated = true;
            break;
        }
        token_count += tokens;
        accepted.push(text);
    }

    AssembledContext {
        text: accepted.join(" "),
        truncated,
        token_count,
    }
}
