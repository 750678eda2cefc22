//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations)
//! module (which decides what to produce) and the
//! [`backend`](super::backend) (which does the actual pixel work). This
//! separation allows swapping backends (e.g. for testing with a mock)
//! without changing driver logic.

use crate::config::{BgColor, Method, TargetSize};
use std::path::PathBuf;

/// Full specification for one screenshot transform.
///
/// The background color participates twice: transparent source pixels are
/// composited over it, and for [`Method::Fit`] it also fills the padding
/// around the scaled content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub method: Method,
    pub target: TargetSize,
    pub bg_color: BgColor,
}
