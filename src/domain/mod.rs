//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - BioASQ input records (`BioAsqDocument`, `QuestionRecord`, `ExactAnswer`)
//! - SQuAD-style output records (`Paragraph`, `QaEntry`, `AnswerSpan`, `ResultDocument`)
//! - the resolved run configuration (`ConvertConfig`)

pub mod types;

pub use types::*;
