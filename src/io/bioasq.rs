//! Read BioASQ JSON files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::BioAsqDocument;
use crate::error::AppError;

/// Parse a BioASQ document (`{"questions": [...]}`) from disk.
pub fn read_bioasq_json(path: &Path) -> Result<BioAsqDocument, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open BioASQ JSON '{}': {e}", path.display())))?;
    let document: BioAsqDocument = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::io(format!("Invalid BioASQ JSON '{}': {e}", path.display())))?;

    tracing::info!(path = %path.display(), questions = document.questions.len(), "Loaded BioASQ questions");
    Ok(document)
}
