//! Write SQuAD-style result documents.
//!
//! Each output is `{"version": "1.0", "data": [{"title", "paragraphs"}]}`,
//! pretty-printed. The title is `<source path> - train` / `<source path> - dev`.

use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::{Paragraph, ResultDocument};
use crate::error::AppError;
use crate::split::Split;

pub const TRAIN_FILE: &str = "train.json";
pub const DEV_FILE: &str = "dev.json";

/// Where the two result documents were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub train: PathBuf,
    pub dev: PathBuf,
}

/// Write one result document as pretty-printed JSON.
pub fn write_squad_json(path: &Path, document: &ResultDocument) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document)
        .map_err(|e| AppError::io(format!("Failed to write '{}': {e}", path.display())))?;
    writer
        .flush()
        .map_err(|e| AppError::io(format!("Failed to write '{}': {e}", path.display())))?;

    Ok(())
}

/// Create `output_dir` (and parents) and write `train.json` and `dev.json` into it.
pub fn write_outputs(output_dir: &Path, source_path: &Path, split: &Split<Paragraph>) -> Result<OutputPaths, AppError> {
    create_dir_all(output_dir).map_err(|e| {
        AppError::io(format!("Failed to create output dir '{}': {e}", output_dir.display()))
    })?;

    let paths = OutputPaths {
        train: output_dir.join(TRAIN_FILE),
        dev: output_dir.join(DEV_FILE),
    };

    let source = source_path.display();
    let train = ResultDocument::new(format!("{source} - train"), split.train.clone());
    write_squad_json(&paths.train, &train)?;
    let dev = ResultDocument::new(format!("{source} - dev"), split.dev.clone());
    write_squad_json(&paths.dev, &dev)?;

    tracing::info!(
        train = %paths.train.display(),
        dev = %paths.dev.display(),
        "Wrote SQuAD outputs"
    );
    Ok(paths)
}
