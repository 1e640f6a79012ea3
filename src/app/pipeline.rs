//! The conversion pipeline, minus writing:
//! load -> filter/build paragraphs -> seeded split -> stats

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::convert::build_paragraphs;
use crate::domain::{BioAsqDocument, ConvertConfig, Paragraph};
use crate::error::AppError;
use crate::io::bioasq::read_bioasq_json;
use crate::report::ConversionStats;
use crate::split::{Split, split_train_dev};

/// All computed outputs of a single conversion run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub split: Split<Paragraph>,
    pub stats: ConversionStats,
}

/// Load the source file and run the pipeline on it.
pub fn run_conversion(config: &ConvertConfig) -> Result<RunOutput, AppError> {
    let document = read_bioasq_json(&config.source_path)?;
    run_conversion_with_document(config, &document)
}

/// Run the pipeline on an already-loaded document.
pub fn run_conversion_with_document(config: &ConvertConfig, document: &BioAsqDocument) -> Result<RunOutput, AppError> {
    let built = build_paragraphs(&document.questions, config.context_token_limit)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let split = split_train_dev(built.paragraphs, config.train_fraction, &mut rng);

    let stats = ConversionStats::compute(&document.questions, &split, built.contexts_truncated);
    tracing::info!(
        paragraphs = stats.total,
        train = stats.train,
        dev = stats.dev,
        "Converted questions"
    );

    Ok(RunOutput { split, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use serde_json::{Value, json};
    use tempdir::TempDir;

    use crate::domain::ResultDocument;
    use crate::io::squad::write_outputs;

    fn write_fixture(dir: &Path, questions: Value) -> std::path::PathBuf {
        let path = dir.join("bioasq.json");
        fs::write(&path, serde_json::to_string(&json!({ "questions": questions })).unwrap()).unwrap();
        path
    }

    fn read_doc(path: &Path) -> ResultDocument {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn single_factoid_end_to_end() {
        let dir = TempDir::new("pipeline-single").unwrap();
        let source = write_fixture(
            dir.path(),
            json!([{
                "id": "q1",
                "type": "factoid",
                "body": "What is important?",
                "exact_answer": ["Protein X"],
                "snippets": [{"text": "Protein X is important."}]
            }]),
        );
        let out_dir = dir.path().join("out");
        let config = ConvertConfig::new(&source, &out_dir);

        let run = run_conversion(&config).unwrap();
        let paths = write_outputs(&config.output_dir, &config.source_path, &run.split).unwrap();

        // floor(0.8 * 1) = 0, so the only paragraph lands in dev.
        let train = read_doc(&paths.train);
        let dev = read_doc(&paths.dev);
        assert!(train.data[0].paragraphs.is_empty());
        assert_eq!(dev.data[0].paragraphs.len(), 1);

        let paragraph = &dev.data[0].paragraphs[0];
        assert_eq!(paragraph.context, "protein x is important.");
        let qa = &paragraph.qas[0];
        assert_eq!(qa.answers.len(), 1);
        assert_eq!(qa.answers[0].text, "protein x");
        assert_eq!(qa.answers[0].answer_start, 0);
        assert_eq!(serde_json::to_value(&qa.original_answers).unwrap(), json!(["Protein X"]));

        assert_eq!(run.stats.total, 1);
        assert_eq!(run.stats.max_context_tokens, 5);
        assert_eq!(run.stats.factoid.used, 1);
    }

    #[test]
    fn skipped_questions_never_reach_the_outputs() {
        let dir = TempDir::new("pipeline-skips").unwrap();
        let mut questions = vec![
            json!({"id": "nomatch", "type": "factoid", "body": "?", "exact_answer": ["insulin"],
                   "snippets": [{"text": "Glucagon raises blood sugar."}]}),
            json!({"id": "nosnip", "type": "list", "body": "?", "exact_answer": [["a"]], "snippets": []}),
            json!({"id": "summary", "type": "summary", "body": "?", "snippets": [{"text": "x"}]}),
            json!({"id": "dup", "type": "list", "body": "Which genes?",
                   "exact_answer": [["BRCA-1", "BRCA1"], ["TP53"]],
                   "snippets": [{"text": "BRCA1 and TP53."}, {"text": "BRCA1 and TP53."}]}),
        ];
        for i in 0..9 {
            questions.push(json!({
                "id": format!("f{i}"), "type": "factoid", "body": "?",
                "exact_answer": ["kinase"], "snippets": [{"text": format!("The kinase number {i}.")}]
            }));
        }
        let source = write_fixture(dir.path(), Value::Array(questions));
        let config = ConvertConfig::new(&source, dir.path().join("out"));

        let run = run_conversion(&config).unwrap();
        assert_eq!(run.stats.total, 10);
        assert_eq!(run.stats.train, 8);
        assert_eq!(run.stats.dev, 2);
        assert_eq!(run.stats.factoid.used, 9);
        assert_eq!(run.stats.factoid.original, 10);
        assert_eq!(run.stats.list.used, 1);
        assert_eq!(run.stats.list.original, 2);

        let all: Vec<&Paragraph> = run.split.train.iter().chain(run.split.dev.iter()).collect();
        let ids: Vec<&str> = all.iter().map(|p| p.qas[0].id.as_str()).collect();
        assert!(!ids.contains(&"nomatch"));
        assert!(!ids.contains(&"nosnip"));
        assert!(!ids.contains(&"summary"));
        assert!(all.iter().all(|p| !p.qas[0].answers.is_empty()));

        let dup = all.iter().find(|p| p.qas[0].id == "dup").unwrap();
        assert_eq!(dup.context, "brca1 and tp53.");
        assert_eq!(dup.qas[0].answers.len(), 2);
    }

    #[test]
    fn same_seed_reproduces_the_split() {
        let questions: Vec<Value> = (0..20)
            .map(|i| {
                json!({"id": format!("q{i}"), "type": "factoid", "body": "?",
                       "exact_answer": ["gene"], "snippets": [{"text": format!("gene {i}")}]})
            })
            .collect();
        let document: BioAsqDocument =
            serde_json::from_value(json!({ "questions": questions })).unwrap();
        let config = ConvertConfig::new("in.json", "out");

        let ids = |run: &RunOutput| -> (Vec<String>, Vec<String>) {
            (
                run.split.train.iter().map(|p| p.qas[0].id.clone()).collect(),
                run.split.dev.iter().map(|p| p.qas[0].id.clone()).collect(),
            )
        };

        let first = run_conversion_with_document(&config, &document).unwrap();
        let second = run_conversion_with_document(&config, &document).unwrap();
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.split.train.len(), 16);
    }

    #[test]
    fn unreadable_source_fails_before_writing() {
        let dir = TempDir::new("pipeline-missing").unwrap();
        let out_dir = dir.path().join("out");
        let config = ConvertConfig::new(dir.path().join("missing.json"), &out_dir);

        assert!(run_conversion(&config).is_err());
        assert!(!out_dir.exists());
    }
}
