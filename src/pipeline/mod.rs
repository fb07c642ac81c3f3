//! Batch processing pipeline
//!
//! Drives a whole run: purge the output root, then for every category
//! file decode, rasterize up to `max_samples` drawings, and write the
//! per-drawing bitmaps plus the per-category CSV. Strictly sequential,
//! fail-fast: the first decode or filesystem error aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::dataset::{category_files, load_category, Category};
use crate::output::{write_csv, write_pbm};
use crate::raster::rasterize;

/// Run configuration, injected rather than read from globals so the
/// pipeline can be pointed at temporary directories.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Upper bound on drawings taken per category (truncation, not
    /// sampling).
    pub max_samples: usize,
}

/// Error type for a pipeline run
#[derive(Debug)]
pub enum PipelineError {
    IoError(std::io::Error),
    DecodeError(serde_json::Error),
    EmptyCategory(PathBuf),
}

impl From<std::io::Error> for PipelineError {
    fn from(e: std::io::Error) -> Self {
        PipelineError::IoError(e)
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(e: serde_json::Error) -> Self {
        PipelineError::DecodeError(e)
    }
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::IoError(e) => write!(f, "IO error: {}", e),
            PipelineError::DecodeError(e) => write!(f, "Decode error: {}", e),
            PipelineError::EmptyCategory(path) => {
                write!(f, "No records in category file: {}", path.display())
            }
        }
    }
}

/// Empty the output root before a run.
///
/// Two-mode traversal: a directory named `images` is descended into and
/// emptied but the directory node itself survives (some platforms refuse
/// to delete a non-empty or in-use directory as a unit); any other
/// directory is removed whole, and plain files are unlinked. A missing
/// or already-empty root is a no-op.
pub fn purge_output_dir<P: AsRef<Path>>(dir: P) -> std::io::Result<()> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            if entry.file_name() == "images" {
                purge_output_dir(&path)?;
            } else {
                fs::remove_dir_all(&path)?;
            }
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Process one decoded category: rasterize its first `max_samples`
/// drawings in input order, writing `<word><index>.ppm` per drawing and
/// `<word>.csv` for the batch.
fn process_category(config: &Config, category: &Category) -> Result<(), PipelineError> {
    let size = category.drawings.len().min(config.max_samples);
    let images_dir = config.output_dir.join("images");
    fs::create_dir_all(&images_dir)?;

    let bar = ProgressBar::new(size as u64);
    let mut canvases = Vec::with_capacity(size);
    for (index, drawing) in category.drawings[..size].iter().enumerate() {
        let canvas = rasterize(drawing);
        write_pbm(
            images_dir.join(format!("{}{}.ppm", category.word, index)),
            &canvas,
        )?;
        canvases.push(canvas);
        bar.inc(1);
    }
    bar.finish_and_clear();

    write_csv(
        config.output_dir.join(format!("{}.csv", category.word)),
        &category.word,
        &canvases,
    )?;
    Ok(())
}

/// Run the full pipeline over every category file in the input
/// directory.
pub fn run(config: &Config) -> Result<(), PipelineError> {
    println!("Cleaning: {}", config.output_dir.display());
    purge_output_dir(&config.output_dir)?;

    for path in category_files(&config.input_dir)? {
        println!("Loading: {}", path.display());
        let category = load_category(&path)?;
        let size = category.drawings.len().min(config.max_samples);
        println!("Batch size: {}", size);
        process_category(config, &category)?;
        println!("Finished processing: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn touch(path: &Path) {
        fs::File::create(path).unwrap();
    }

    #[test]
    fn test_purge_keeps_images_dir_but_empties_it() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let images = root.join("images");
        fs::create_dir(&images).unwrap();
        touch(&root.join("cat.csv"));
        touch(&images.join("cat0.ppm"));
        fs::create_dir(root.join("scratch")).unwrap();
        touch(&root.join("scratch").join("junk"));

        purge_output_dir(root).unwrap();

        assert!(images.is_dir());
        assert!(!images.join("cat0.ppm").exists());
        assert!(!root.join("cat.csv").exists());
        assert!(!root.join("scratch").exists());
    }

    #[test]
    fn test_purge_descends_nested_images_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("images").join("images");
        fs::create_dir_all(&nested).unwrap();
        touch(&nested.join("stale.ppm"));

        purge_output_dir(dir.path()).unwrap();

        assert!(nested.is_dir());
        assert!(!nested.join("stale.ppm").exists());
    }

    #[test]
    fn test_purge_twice_on_empty_root_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        purge_output_dir(dir.path()).unwrap();
        purge_output_dir(dir.path()).unwrap();
    }

    #[test]
    fn test_purge_missing_root_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        purge_output_dir(dir.path().join("not_there")).unwrap();
    }

    fn write_category(dir: &Path, name: &str, word: &str, count: usize) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        for i in 0..count {
            writeln!(
                file,
                r#"{{"word": "{}", "recognized": true, "drawing": [[[0, {}], [0, 5]]]}}"#,
                word,
                10 + i
            )
            .unwrap();
        }
    }

    #[test]
    fn test_run_truncates_to_max_samples() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_category(input.path(), "cat.ndjson", "cat", 5);

        let config = Config {
            input_dir: input.path().to_path_buf(),
            output_dir: output.path().to_path_buf(),
            max_samples: 3,
        };
        run(&config).unwrap();

        let images: Vec<_> = fs::read_dir(output.path().join("images"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(images.len(), 3);
        for i in 0..3 {
            assert!(images.contains(&format!("cat{}.ppm", i)));
        }

        let csv = fs::read_to_string(output.path().join("cat.csv")).unwrap();
        assert_eq!(csv.lines().count(), 1 + 3);
    }

    #[test]
    fn test_run_processes_every_category() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_category(input.path(), "cat.ndjson", "cat", 2);
        write_category(input.path(), "dog.ndjson", "dog", 1);

        let config = Config {
            input_dir: input.path().to_path_buf(),
            output_dir: output.path().to_path_buf(),
            max_samples: 10_000,
        };
        run(&config).unwrap();

        assert!(output.path().join("cat.csv").is_file());
        assert!(output.path().join("dog.csv").is_file());
        assert!(output.path().join("images").join("cat1.ppm").is_file());
        assert!(output.path().join("images").join("dog0.ppm").is_file());
    }

    #[test]
    fn test_run_purges_stale_artifacts_first() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_category(input.path(), "cat.ndjson", "cat", 1);

        let stale_images = output.path().join("images");
        fs::create_dir(&stale_images).unwrap();
        touch(&stale_images.join("old0.ppm"));
        touch(&output.path().join("old.csv"));

        let config = Config {
            input_dir: input.path().to_path_buf(),
            output_dir: output.path().to_path_buf(),
            max_samples: 10_000,
        };
        run(&config).unwrap();

        assert!(!stale_images.join("old0.ppm").exists());
        assert!(!output.path().join("old.csv").exists());
        assert!(stale_images.join("cat0.ppm").is_file());
    }

    #[test]
    fn test_run_fails_fast_on_malformed_category() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("bad.ndjson"), "not json\n").unwrap();

        let config = Config {
            input_dir: input.path().to_path_buf(),
            output_dir: output.path().to_path_buf(),
            max_samples: 10_000,
        };
        assert!(run(&config).is_err());
    }
}
