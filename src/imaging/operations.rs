//! High-level image operations.
//!
//! These functions combine configuration with backend execution. They take
//! the run configuration, build parameters, and call the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::TransformParams;
use crate::config::Config;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let Dimensions { width, height } = backend.identify(path)?;
    Ok((width, height))
}

/// Transform one screenshot according to the run configuration.
///
/// The output file keeps the source filename, so re-running overwrites
/// previous results instead of accumulating variants.
pub fn transform_screenshot(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    config: &Config,
) -> Result<PathBuf> {
    let filename = source.file_name().ok_or_else(|| {
        BackendError::ProcessingFailed(format!("Source has no filename: {}", source.display()))
    })?;
    let output = output_dir.join(filename);

    backend.transform(&TransformParams {
        source: source.to_path_buf(),
        output: output.clone(),
        method: config.method,
        target: config.target,
        bg_color: config.bg_color,
    })?;

    Ok(output)
}
