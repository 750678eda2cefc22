//! Transform engine — pure Rust, zero external tools.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Flatten** | alpha composite over the background color |
//! | **Fit / Stretch / Crop** | Lanczos3 resize + center pad/crop |
//! | **Encode → PNG** | `PngEncoder`, best compression |
//!
//! The module is split into:
//! - **Calculations**: pure functions for dimension math (unit testable)
//! - **Parameters**: data structures describing transforms
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: high-level functions combining calculations + backend

pub mod backend;
pub mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{center_offset, crop_rect, fit_dimensions};
pub use operations::{get_dimensions, transform_screenshot};
pub use params::TransformParams;
pub use rust_backend::RustBackend;
