//! Run configuration: target size, method, paths, background color.
//!
//! Everything here is resolved once at startup from CLI flags and stays
//! immutable for the rest of the run. Validation happens at construction:
//! a malformed background color is a fatal [`ConfigError`] before any file
//! is touched.

use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid background color {0:?}: use R,G,B format with channels 0-255 (e.g. \"45,45,45\")")]
    InvalidBgColor(String),
}

/// Geometric transform applied to every screenshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Scale preserving aspect ratio, pad the rest with the background color
    #[default]
    Fit,
    /// Resample to exactly the target size, ignoring aspect ratio
    Stretch,
    /// Center-crop to the target aspect ratio, then resize
    Crop,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Fit => "fit",
            Method::Stretch => "stretch",
            Method::Crop => "crop",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact dimensions every processed screenshot must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl Default for TargetSize {
    fn default() -> Self {
        // Store listing screenshot size (e.g. Chrome Web Store)
        Self {
            width: 1280,
            height: 800,
        }
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Opaque background color used for padding and alpha flattening.
///
/// Parsed from the CLI as three comma-separated 8-bit channels. Anything
/// else — wrong arity, non-numeric, out of range — is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BgColor(pub [u8; 3]);

impl BgColor {
    pub fn channels(self) -> [u8; 3] {
        self.0
    }
}

impl Default for BgColor {
    fn default() -> Self {
        Self([45, 45, 45])
    }
}

impl FromStr for BgColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ConfigError::InvalidBgColor(s.to_string()));
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            // u8 parsing covers the 0-255 range check: "999" and "-1" both fail
            *slot = part
                .parse()
                .map_err(|_| ConfigError::InvalidBgColor(s.to_string()))?;
        }
        Ok(Self(channels))
    }
}

impl fmt::Display for BgColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "RGB({r}, {g}, {b})")
    }
}

/// Immutable set of resolved options for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub target: TargetSize,
    pub method: Method,
    pub images_dir: PathBuf,
    pub output_dir: PathBuf,
    pub bg_color: BgColor,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: TargetSize::default(),
            method: Method::default(),
            images_dir: PathBuf::from("images"),
            output_dir: PathBuf::from("dist/images"),
            bg_color: BgColor::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bg_color_parses_valid_input() {
        let color: BgColor = "45,45,45".parse().unwrap();
        assert_eq!(color.channels(), [45, 45, 45]);
    }

    #[test]
    fn bg_color_tolerates_whitespace() {
        let color: BgColor = " 10, 20 ,30 ".parse().unwrap();
        assert_eq!(color.channels(), [10, 20, 30]);
    }

    #[test]
    fn bg_color_accepts_channel_bounds() {
        let color: BgColor = "0,255,0".parse().unwrap();
        assert_eq!(color.channels(), [0, 255, 0]);
    }

    #[test]
    fn bg_color_rejects_out_of_range_channel() {
        assert!("999,0,0".parse::<BgColor>().is_err());
    }

    #[test]
    fn bg_color_rejects_negative_channel() {
        assert!("-1,0,0".parse::<BgColor>().is_err());
    }

    #[test]
    fn bg_color_rejects_wrong_arity() {
        assert!("45,45".parse::<BgColor>().is_err());
        assert!("45,45,45,45".parse::<BgColor>().is_err());
        assert!("".parse::<BgColor>().is_err());
    }

    #[test]
    fn bg_color_rejects_non_numeric() {
        assert!("dark,dark,dark".parse::<BgColor>().is_err());
    }

    #[test]
    fn bg_color_error_names_the_input() {
        let err = "999,0,0".parse::<BgColor>().unwrap_err();
        assert!(err.to_string().contains("999,0,0"));
    }

    #[test]
    fn bg_color_display() {
        assert_eq!(BgColor([45, 45, 45]).to_string(), "RGB(45, 45, 45)");
    }

    #[test]
    fn method_as_str_round_trips_cli_names() {
        assert_eq!(Method::Fit.as_str(), "fit");
        assert_eq!(Method::Stretch.as_str(), "stretch");
        assert_eq!(Method::Crop.as_str(), "crop");
    }

    #[test]
    fn target_size_display() {
        assert_eq!(TargetSize::default().to_string(), "1280x800");
    }

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.target, TargetSize { width: 1280, height: 800 });
        assert_eq!(config.method, Method::Fit);
        assert_eq!(config.images_dir, PathBuf::from("images"));
        assert_eq!(config.output_dir, PathBuf::from("dist/images"));
        assert_eq!(config.bg_color.channels(), [45, 45, 45]);
    }
}
