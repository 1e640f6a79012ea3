//! Paragraph builder: one BioASQ question -> one SQuAD paragraph (or a skip).

use crate::convert::{SkipReason, assemble_context, filter_questions, resolve_answers};
use crate::domain::{Paragraph, QaEntry, QuestionRecord};
use crate::error::AppError;

/// A built paragraph plus whether its context hit the token limit.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltParagraph {
    pub paragraph: Paragraph,
    pub truncated: bool,
}

/// All paragraphs built from a corpus.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub paragraphs: Vec<Paragraph>,
    pub contexts_truncated: usize,
    /// Questions that passed the filter, before answer resolution.
    pub candidates: usize,
}

/// Build the paragraph for a single question that passed `check_question`.
///
/// Returns `Ok(None)` (after logging a warning) when none of its answers can be
/// located in the context. A question without `exact_answer` is an internal error.
pub fn build_paragraph(question: &QuestionRecord, token_limit: usize) -> Result<Option<BuiltParagraph>, AppError> {
    let Some(exact_answer) = &question.exact_answer else {
        return Err(AppError::internal(format!(
            "Question {}: no exact_answer after filtering.",
            question.id
        )));
    };

    let context = assemble_context(&question.snippets, token_limit);
    let context_lower = context.text.to_lowercase();

    let answers = resolve_answers(exact_answer, &context_lower)
        .map_err(|e| AppError::new(e.exit_code(), format!("Question {}: {e}", question.id)))?;

    if answers.is_empty() {
        tracing::warn!("Skipping question {}. {}", question.id, SkipReason::NoMatchingAnswer);
        return Ok(None);
    }

    let qa = QaEntry {
        id: question.id.clone(),
        question: question.body.to_lowercase(),
        answers,
        original_answers: exact_answer.clone(),
        question_type: question.question_type,
    };

    Ok(Some(BuiltParagraph {
        paragraph: Paragraph {
            context: context_lower,
            qas: vec![qa],
        },
        truncated: context.truncated,
    }))
}

/// Filter the corpus and build a paragraph for every convertible question.
pub fn build_paragraphs(questions: &[QuestionRecord], token_limit: usize) -> Result<BuildOutput, AppError> {
    let candidates = filter_questions(questions);
    let mut out = BuildOutput {
        candidates: candidates.len(),
        ..BuildOutput::default()
    };

    for question in candidates {
        if let Some(built) = build_paragraph(question, token_limit)? {
            if built.truncated {
                out.contexts_truncated += 1;
            }
            out.paragraphs.push(built.paragraph);
        }
    }

    tracing::debug!(
        candidates = out.candidates,
        paragraphs = out.paragraphs.len(),
        truncated = out.contexts_truncated,
        "Built paragraphs"
    );

    Ok(out)
}
