//! # storefit
//!
//! Batch-resize PNG screenshots to a fixed target resolution for store
//! submission. Reads `screenshot-*.png` files from an images directory,
//! applies one geometric transform per file, and writes the results to an
//! output directory. Originals are never modified.
//!
//! # Architecture: Sequential Pipeline
//!
//! ```text
//! 1. Configure   CLI flags  →  Config     (target size, method, paths, color)
//! 2. Scan        images/    →  sorted screenshot-*.png list
//! 3. Transform   each file  →  fit | stretch | crop  →  output PNG
//! 4. Report      per-file lines + aggregate success/failure counts
//! ```
//!
//! Processing is strictly sequential: one file at a time, each image buffer
//! scoped to its own loop iteration. A failure on one file is recorded and
//! the batch continues; only configuration and discovery errors abort the
//! run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Resolved run options: target size, method, paths, background color |
//! | [`scan`] | Discovers `screenshot-*.png` files, sorted for determinism |
//! | [`process`] | Driver — runs every file through the transform engine, collects outcomes |
//! | [`imaging`] | Transform engine: fit, stretch, crop, alpha flattening |
//! | [`output`] | CLI output formatting — run header, per-file lines, summary |
//!
//! # Design Decisions
//!
//! ## Opaque Output
//!
//! Store listing pipelines reject or mishandle transparency, so every
//! transform composites the source over the configured background color
//! and writes opaque RGB. Alpha never survives into the output.
//!
//! ## Deterministic PNG Encoding
//!
//! Outputs are encoded with the `image` crate's PNG encoder at best
//! compression. Identical inputs and configuration produce byte-identical
//! outputs, so re-running the tool is idempotent.
//!
//! ## Pure-Rust Imaging (No ImageMagick, No PIL)
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling) for
//! all pixel work. This eliminates system dependencies entirely: no
//! `apt install`, no Homebrew, no version conflicts. The binary is fully
//! self-contained.

pub mod config;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;
