//! Shared domain types.
//!
//! Input and output records are plain serde structs so the loader and writer
//! stay trivial; all reshaping happens in `convert`.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level BioASQ document: `{"questions": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct BioAsqDocument {
    pub questions: Vec<QuestionRecord>,
}

/// BioASQ question type.
///
/// Only `factoid` and `list` are converted. Anything unrecognised lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Factoid,
    List,
    Yesno,
    Summary,
    #[serde(other)]
    Other,
}

impl QuestionType {
    pub fn is_supported(self) -> bool {
        matches!(self, QuestionType::Factoid | QuestionType::List)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Factoid => "factoid",
            QuestionType::List => "list",
            QuestionType::Yesno => "yesno",
            QuestionType::Summary => "summary",
            QuestionType::Other => "other",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One BioASQ question. Fields the converter does not use are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub body: String,
    #[serde(default)]
    pub exact_answer: Option<ExactAnswer>,
    #[serde(default)]
    pub snippets: Vec<Snippet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    pub text: String,
}

/// The `exact_answer` field.
///
/// Factoid questions usually carry a list of strings, list questions a list of
/// alternative-phrasing lists. A bare string is accepted as a single slot.
/// Serializing reproduces the input JSON shape (used for `original_answers`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExactAnswer {
    Text(String),
    Slots(Vec<AnswerSlot>),
}

impl ExactAnswer {
    /// Answer slots in input order. A bare string is a single slot.
    pub fn slots(&self) -> Vec<AnswerSlot> {
        match self {
            ExactAnswer::Text(text) => vec![AnswerSlot::Single(text.clone())],
            ExactAnswer::Slots(slots) => slots.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ExactAnswer::Text(_) => false,
            ExactAnswer::Slots(slots) => slots.is_empty(),
        }
    }
}

/// One answer slot: a plain answer or alternative phrasings of the same answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerSlot {
    Single(String),
    Alternatives(Vec<String>),
}

/// A located answer: character offset into the context plus the cleaned answer text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSpan {
    pub answer_start: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaEntry {
    pub id: String,
    pub question: String,
    pub answers: Vec<AnswerSpan>,
    pub original_answers: ExactAnswer,
    pub question_type: QuestionType,
}

/// SQuAD paragraph: one context with its questions (always exactly one here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub context: String,
    pub qas: Vec<QaEntry>,
}

impl Paragraph {
    /// Type of the (single) question attached to this paragraph.
    pub fn question_type(&self) -> Option<QuestionType> {
        self.qas.first().map(|qa| qa.question_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultArticle {
    pub title: String,
    pub paragraphs: Vec<Paragraph>,
}

/// SQuAD result document: `{"version": "1.0", "data": [{title, paragraphs}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDocument {
    pub version: String,
    pub data: Vec<ResultArticle>,
}

pub const SQUAD_VERSION: &str = "1.0";

impl ResultDocument {
    pub fn new(title: impl Into<String>, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            version: SQUAD_VERSION.to_string(),
            data: vec![ResultArticle {
                title: title.into(),
                paragraphs,
            }],
        }
    }
}

pub const DEFAULT_SEED: u64 = 1234;
pub const DEFAULT_TRAIN_FRACTION: f64 = 0.8;
/// The longest BioASQ contexts run to ~4300 tokens; SQuAD tops out around 700.
pub const DEFAULT_CONTEXT_TOKEN_LIMIT: usize = 700;

/// Resolved configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub source_path: PathBuf,
    pub output_dir: PathBuf,
    pub seed: u64,
    pub train_fraction: f64,
    pub context_token_limit: usize,
}

impl ConvertConfig {
    pub fn new(source_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            output_dir: output_dir.into(),
            seed: DEFAULT_SEED,
            train_fraction: DEFAULT_TRAIN_FRACTION,
            context_token_limit: DEFAULT_CONTEXT_TOKEN_LIMIT,
        }
    }
}
