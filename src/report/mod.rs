//! Conversion statistics.
//!
//! Purely informational: nothing here feeds back into the written files.

pub mod format;

pub use format::*;

use crate::domain::{Paragraph, QuestionRecord, QuestionType};
use crate::split::Split;
use crate::text::count_tokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeUsage {
    pub used: usize,
    pub original: usize,
}

/// Summary numbers for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionStats {
    pub total: usize,
    pub train: usize,
    pub dev: usize,
    /// Longest emitted context, in tokens. Zero when nothing was emitted.
    pub max_context_tokens: usize,
    pub contexts_truncated: usize,
    pub factoid: TypeUsage,
    pub list: TypeUsage,
}

impl ConversionStats {
    pub fn compute(questions: &[QuestionRecord], split: &Split<Paragraph>, contexts_truncated: usize) -> Self {
        let emitted = || split.train.iter().chain(split.dev.iter());

        let max_context_tokens = emitted().map(|p| count_tokens(&p.context)).max().unwrap_or(0);
        let usage = |kind: QuestionType| TypeUsage {
            used: emitted().filter(|p| p.question_type() == Some(kind)).count(),
            original: questions.iter().filter(|q| q.question_type == kind).count(),
        };

        Self {
            total: split.len(),
            train: split.train.len(),
            dev: split.dev.len(),
            max_context_tokens,
            contexts_truncated,
            factoid: usage(QuestionType::Factoid),
            list: usage(QuestionType::List),
        }
    }
}
