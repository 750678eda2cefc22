//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` |
//! | Decode (PNG) | `image` crate (pure Rust decoder) |
//! | Flatten | `to_rgba8` + per-pixel composite over the background |
//! | Resize | `image::imageops::resize` with `Lanczos3` |
//! | Crop | `image::imageops::crop_imm` |
//! | Encode → PNG | `image::codecs::png::PngEncoder`, best compression |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{center_offset, crop_rect, fit_dimensions};
use super::params::TransformParams;
use crate::config::{BgColor, Method, TargetSize};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, Rgb, RgbImage};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Composite the image over an opaque background, discarding alpha.
///
/// Every source mode (palette, gray, RGBA) goes through RGBA here, so
/// transparency always ends up as the background color and the output is
/// plain 3-channel RGB.
fn flatten(img: &DynamicImage, bg: BgColor) -> RgbImage {
    let [bg_r, bg_g, bg_b] = bg.channels();
    let rgba = img.to_rgba8();

    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in out.pixels_mut().zip(rgba.pixels()) {
        let [r, g, b, a] = src.0;
        let a = a as u32;
        let inv = 255 - a;
        *dst = Rgb([
            ((r as u32 * a + bg_r as u32 * inv + 127) / 255) as u8,
            ((g as u32 * a + bg_g as u32 * inv + 127) / 255) as u8,
            ((b as u32 * a + bg_b as u32 * inv + 127) / 255) as u8,
        ]);
    }
    out
}

/// Scale to fit within the target and center on a background-filled canvas.
fn fit(img: &RgbImage, target: TargetSize, bg: BgColor) -> RgbImage {
    let (w, h) = fit_dimensions((img.width(), img.height()), (target.width, target.height));
    let scaled = image::imageops::resize(img, w, h, FilterType::Lanczos3);

    let mut canvas = RgbImage::from_pixel(target.width, target.height, Rgb(bg.channels()));
    let (x, y) = center_offset((w, h), (target.width, target.height));
    image::imageops::replace(&mut canvas, &scaled, x as i64, y as i64);
    canvas
}

/// Resample to exactly the target size along both axes.
fn stretch(img: &RgbImage, target: TargetSize) -> RgbImage {
    image::imageops::resize(img, target.width, target.height, FilterType::Lanczos3)
}

/// Center-crop to the target aspect ratio, then resize to the target.
fn crop(img: &RgbImage, target: TargetSize) -> RgbImage {
    let (x, y, w, h) = crop_rect((img.width(), img.height()), (target.width, target.height));
    let cropped = image::imageops::crop_imm(img, x, y, w, h).to_image();
    image::imageops::resize(&cropped, target.width, target.height, FilterType::Lanczos3)
}

/// Save an image to the given path, inferring format from extension.
fn save_image(img: &RgbImage, path: &Path) -> Result<(), BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "png" => save_png(img, path),
        other => Err(BackendError::ProcessingFailed(format!(
            "Unsupported output format: {}",
            other
        ))),
    }
}

/// Encode and save as PNG, best compression.
///
/// The encoder is deterministic: identical pixels produce identical bytes,
/// which keeps re-runs byte-for-byte idempotent.
fn save_png(img: &RgbImage, path: &Path) -> Result<(), BackendError> {
    use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};

    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, PngFilter::Adaptive);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn transform(&self, params: &TransformParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;

        // Alpha is flattened before any geometry; it never survives into
        // the output.
        let flat = flatten(&img, params.bg_color);

        let result = match params.method {
            Method::Fit => fit(&flat, params.target, params.bg_color),
            Method::Stretch => stretch(&flat, params.target),
            Method::Crop => crop(&flat, params.target),
        };

        save_image(&result, &params.output)
    }
}
