//! Error types. Almost everything in this crate is plain arithmetic that reports trouble through
//! NaN rather than through `Result`: the types here cover the few places where a caller can ask
//! for a hard failure instead, and configuration loading.

use std::io;

use thiserror::Error;

/// Errors from the opt-in checked color conversions.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ColorError {
    /// An xyY color with chromaticity y of zero has no XYZ equivalent: the conversion divides by y.
    #[error("xyY color has zero chromaticity y (x = {x}, Y = {big_y}); cannot convert to XYZ")]
    ZeroChromaticityY {
        /// The chromaticity x of the offending color.
        x: f64,
        /// The luminance Y of the offending color.
        big_y: f64,
    },
}

/// Errors from reading and checking a [`SkyConfig`](../config/struct.SkyConfig.html).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read sky configuration: {0}")]
    Io(#[from] io::Error),
    /// The configuration text is not valid RON for a `SkyConfig`.
    #[error("failed to parse sky configuration RON: {0}")]
    Parse(String),
    /// A field parsed but holds a value the sky pipeline can't use.
    #[error("invalid sky configuration value for `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
