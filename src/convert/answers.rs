//! Answer resolution: pick one phrasing per answer slot, clean it, and locate
//! every whole-word occurrence in the lowercased context.

use crate::domain::{AnswerSlot, AnswerSpan, ExactAnswer};
use crate::error::AppError;
use crate::text::is_word_char;

/// Choose the answer string for one slot.
///
/// For alternatives, the first non-empty phrasing found (case-insensitively) in
/// the context wins; otherwise the first phrasing is used as-is. Returns `None`
/// only for an empty alternatives list.
pub fn select_candidate<'a>(slot: &'a AnswerSlot, context_lower: &str) -> Option<&'a str> {
    match slot {
        AnswerSlot::Single(answer) => Some(answer.as_str()),
        AnswerSlot::Alternatives(alternatives) => alternatives
            .iter()
            .find(|alt| !alt.is_empty() && context_lower.contains(alt.to_lowercase().as_str()))
            .or_else(|| alternatives.first())
            .map(String::as_str),
    }
}

/// Normalize an answer for span matching.
///
/// Trim and lowercase, drop a leading `"the "`, then drop one trailing
/// non-word character: `"The Protein."` -> `"protein"`.
pub fn clean_answer(answer: &str) -> String {
    let lowered = answer.trim().to_lowercase();
    let mut cleaned = lowered.strip_prefix("the ").unwrap_or(lowered.as_str()).to_string();

    if cleaned.chars().next_back().is_some_and(|c| !is_word_char(c)) {
        cleaned.pop();
    }
    cleaned
}

/// Character offsets of every whole-word occurrence of `needle` in `haystack`.
///
/// A hit must be preceded by a non-word character or the start of the string and
/// followed by a non-word character or the end of the string. Overlapping
/// occurrences are all considered; each offset is reported once.
pub fn find_whole_word_positions(haystack: &str, needle: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    if needle.is_empty() {
        return positions;
    }

    let mut from = 0;
    while let Some(found) = haystack[from..].find(needle) {
        let start = from + found;
        let end = start + needle.len();

        let open_before = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_word_char(c));
        let open_after = haystack[end..].chars().next().is_none_or(|c| !is_word_char(c));

        if open_before && open_after {
            positions.push(haystack[..start].chars().count());
        }

        // Step one character so overlapping occurrences are still visited.
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }

    positions
}

/// Resolve all answer slots against a lowercased context.
///
/// Spans from every slot are concatenated in slot order. An empty result means
/// the question has no usable answer. An empty `exact_answer` list is a broken
/// upstream contract and is reported as an internal error.
pub fn resolve_answers(exact_answer: &ExactAnswer, context_lower: &str) -> Result<Vec<AnswerSpan>, AppError> {
    if exact_answer.is_empty() {
        return Err(AppError::internal("exact_answer has no answer slots."));
    }

    let mut spans = Vec::new();
    for slot in exact_answer.slots() {
        let Some(candidate) = select_candidate(&slot, context_lower) else {
            continue;
        };

        let answer = clean_answer(candidate);
        for answer_start in find_whole_word_positions(context_lower, &answer) {
            spans.push(AnswerSpan {
                answer_start,
                text: answer.clone(),
            });
        }
    }

    Ok(spans)
}
