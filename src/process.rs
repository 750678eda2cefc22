//! Batch processing driver.
//!
//! Takes the resolved configuration, discovers screenshots, and runs each
//! one through the transform engine, reporting as it goes.
//!
//! ## Error tiers
//!
//! Configuration and discovery problems (missing images directory, no
//! matching files, unwritable output directory) abort the run with a
//! [`ProcessError`]. Per-file problems (corrupt image, encode failure)
//! become a [`FileOutcome::Failure`], are counted, and the batch continues
//! with the remaining files.

use crate::config::Config;
use crate::imaging::{ImageBackend, RustBackend, get_dimensions, transform_screenshot};
use crate::output;
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Per-file outcome. Failures carry the message shown in the report.
#[derive(Debug)]
pub enum FileOutcome {
    Success {
        source: PathBuf,
        /// Original dimensions (width, height), before the transform.
        original: (u32, u32),
        output: PathBuf,
    },
    Failure {
        source: PathBuf,
        /// Present when the file could be identified before the transform
        /// failed; the report still shows the original size.
        original: Option<(u32, u32)>,
        error: String,
    },
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Success { .. })
    }
}

/// Aggregate result of one batch run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
    pub successful: usize,
    pub failed: usize,
}

/// Run the batch with the production backend.
pub fn run(config: &Config) -> Result<RunSummary, ProcessError> {
    let backend = RustBackend::new();
    run_with_backend(&backend, config)
}

/// Run the batch using a specific backend (allows testing with a mock).
pub fn run_with_backend(
    backend: &impl ImageBackend,
    config: &Config,
) -> Result<RunSummary, ProcessError> {
    let files = scan::find_screenshots(&config.images_dir)?;

    std::fs::create_dir_all(&config.output_dir)?;

    output::print_run_header(config, files.len());

    let mut summary = RunSummary::default();
    for source in &files {
        let outcome = process_file(backend, source, config);
        output::print_file_outcome(&outcome, config);

        match &outcome {
            FileOutcome::Success { .. } => summary.successful += 1,
            FileOutcome::Failure { .. } => summary.failed += 1,
        }
        summary.outcomes.push(outcome);
    }

    output::print_summary(&summary, config);
    Ok(summary)
}

/// Process one file; every per-file error folds into a Failure outcome.
fn process_file(backend: &impl ImageBackend, source: &Path, config: &Config) -> FileOutcome {
    let original = match get_dimensions(backend, source) {
        Ok(dims) => dims,
        Err(e) => {
            return FileOutcome::Failure {
                source: source.to_path_buf(),
                original: None,
                error: e.to_string(),
            };
        }
    };

    match transform_screenshot(backend, source, &config.output_dir, config) {
        Ok(output) => FileOutcome::Success {
            source: source.to_path_buf(),
            original,
            output,
        },
        Err(e) => FileOutcome::Failure {
            source: source.to_path_buf(),
            original: Some(original),
            error: e.to_string(),
        },
    }
}
