//! Question filter: keep supported question types that have something to convert.

use crate::convert::SkipReason;
use crate::domain::QuestionRecord;

/// Check a single question. `Err` carries the reason it would be dropped.
pub fn check_question(question: &QuestionRecord) -> Result<(), SkipReason> {
    if !question.question_type.is_supported() {
        return Err(SkipReason::UnsupportedType);
    }
    if question.snippets.is_empty() {
        return Err(SkipReason::NoSnippets);
    }
    if question.exact_answer.is_none() {
        return Err(SkipReason::NoExactAnswer);
    }
    Ok(())
}

/// Retain factoid/list questions with at least one snippet and an exact answer.
///
/// Dropping never aborts the run; every dropped question is logged as a warning
/// with its id and the reason.
pub fn filter_questions(questions: &[QuestionRecord]) -> Vec<&QuestionRecord> {
    questions
        .iter()
        .filter(|question| match check_question(question) {
            Ok(()) => true,
            Err(reason) => {
                tracing::warn!(
                    question_type = %question.question_type,
                    "Skipping question {}. {}",
                    question.id,
                    reason
                );
                false
            }
        })
        .collect()
}
