//! BioASQ question -> SQuAD paragraph conversion.
//!
//! - question filtering (`filter`)
//! - bounded, deduplicated context assembly (`context`)
//! - answer candidate selection, cleaning and span location (`answers`)
//! - paragraph construction (`paragraph`)

pub mod answers;
pub mod context;
pub mod filter;
pub mod paragraph;

pub use answers::*;
pub use context::*;
pub use filter::*;
pub use paragraph::*;

use std::fmt;

/// Why a question did not make it into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedType,
    NoSnippets,
    NoExactAnswer,
    NoMatchingAnswer,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::UnsupportedType => "Unsupported question type.",
            SkipReason::NoSnippets => "No snippets.",
            SkipReason::NoExactAnswer => "No exact answer.",
            SkipReason::NoMatchingAnswer => "No matching answer.",
        };
        f.write_str(text)
    }
}
