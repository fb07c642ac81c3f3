//! Category input loading
//!
//! One input file = one category: newline-delimited JSON where every
//! line is a raw sample with a label, a recognized flag, and its stroke
//! list. Only recognized samples with at least one stroke are kept.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::pipeline::PipelineError;
use crate::raster::Stroke;

/// One raw QuickDraw record as it appears on an input line. Fields the
/// pipeline does not consume (country code, timestamp, key id) are
/// ignored by the decoder.
#[derive(Debug, Deserialize)]
struct RawRecord {
    word: String,
    recognized: bool,
    drawing: Vec<Stroke>,
}

/// One decoded category: a label and the drawings retained for it, in
/// input order.
#[derive(Debug)]
pub struct Category {
    pub word: String,
    pub drawings: Vec<Vec<Stroke>>,
}

/// Decode one category file.
///
/// The label comes from the first record of the file, recognized or not.
/// A file with no records is a decode failure.
pub fn load_category<P: AsRef<Path>>(path: P) -> Result<Category, PipelineError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let mut word = None;
    let mut drawings = Vec::new();

    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let record: RawRecord = serde_json::from_str(line)?;
        if word.is_none() {
            word = Some(record.word.clone());
        }
        if record.recognized && !record.drawing.is_empty() {
            drawings.push(record.drawing);
        }
    }

    match word {
        Some(word) => Ok(Category { word, drawings }),
        None => Err(PipelineError::EmptyCategory(path.to_path_buf())),
    }
}

/// List the category files directly under the input directory, sorted
/// for deterministic runs. Subdirectories are skipped.
pub fn category_files<P: AsRef<Path>>(input_dir: P) -> Result<Vec<PathBuf>, PipelineError> {
    let mut paths: Vec<_> = fs::read_dir(input_dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| !path.is_dir())
        .collect();
    paths.sort();
    Ok(paths)
}
