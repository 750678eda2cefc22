//! CLI output formatting.
//!
//! Each report has a `format_*` function (returning lines) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure
//! — no I/O, no side effects.
//!
//! # Output Format
//!
//! ```text
//! Found 3 screenshot files to resize
//! Target size: 1280x800
//! Method: fit
//! Background color: RGB(45, 45, 45)
//! Output directory: dist/images
//!
//! Processing: screenshot-1.png
//!   Original size: 1920x1080
//!   ✓ Resized to: 1280x800
//!   ✓ Saved to: dist/images/screenshot-1.png
//!
//! Processing: screenshot-2.png
//!   ✗ Failed: Failed to decode images/screenshot-2.png: ...
//!
//! Completed: 1 successful, 1 failed
//! ```

use crate::config::Config;
use crate::process::{FileOutcome, RunSummary};
use std::path::Path;

/// Display name for a file: its filename, falling back to the whole path.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format the run header: file count and the resolved configuration.
pub fn format_run_header(config: &Config, file_count: usize) -> Vec<String> {
    vec![
        format!("Found {} screenshot files to resize", file_count),
        format!("Target size: {}", config.target),
        format!("Method: {}", config.method),
        format!("Background color: {}", config.bg_color),
        format!("Output directory: {}", config.output_dir.display()),
        String::new(),
    ]
}

/// Format one file's report block.
pub fn format_file_outcome(outcome: &FileOutcome, config: &Config) -> Vec<String> {
    match outcome {
        FileOutcome::Success {
            source,
            original,
            output,
        } => vec![
            format!("Processing: {}", file_name(source)),
            format!("  Original size: {}x{}", original.0, original.1),
            format!("  ✓ Resized to: {}", config.target),
            format!("  ✓ Saved to: {}", output.display()),
            String::new(),
        ],
        FileOutcome::Failure {
            source,
            original,
            error,
        } => {
            let mut lines = vec![format!("Processing: {}", file_name(source))];
            if let Some((w, h)) = original {
                lines.push(format!("  Original size: {}x{}", w, h));
            }
            lines.push(format!("  ✗ Failed: {}", error));
            lines.push(String::new());
            lines
        }
    }
}

/// Format the aggregate summary, plus a closing note when anything
/// succeeded.
pub fn format_summary(summary: &RunSummary, config: &Config) -> Vec<String> {
    let mut lines = vec![format!(
        "Completed: {} successful, {} failed",
        summary.successful, summary.failed
    )];

    if summary.successful > 0 {
        lines.push(String::new());
        lines.push("Resized images are ready for store submission!".to_string());
        lines.push(format!(
            "Check the '{}' directory for your resized screenshots.",
            config.output_dir.display()
        ));
        lines.push(format!(
            "Original files remain unchanged in '{}'.",
            config.images_dir.display()
        ));
    }

    lines
}

pub fn print_run_header(config: &Config, file_count: usize) {
    for line in format_run_header(config, file_count) {
        println!("{}", line);
    }
}

pub fn print_file_outcome(outcome: &FileOutcome, config: &Config) {
    for line in format_file_outcome(outcome, config) {
        println!("{}", line);
    }
}

pub fn print_summary(summary: &RunSummary, config: &Config) {
    for line in format_summary(summary, config) {
        println!("{}", line);
    }
}
