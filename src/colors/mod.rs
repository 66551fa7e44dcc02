//! This module contains the concrete color types, one per color space the sky pipeline touches. For
//! convenience, each type is imported into this module's namespace directly. Code that needs to hold
//! "a color in some space" uses the [`Color`] sum type instead.
//!
//! [`Color`]: ../color/enum.Color.html
pub mod hsvcolor;
pub mod rgbcolor;
pub mod xyycolor;
pub mod xyzcolor;

// for convenience, use this namespace for the color objects
pub use self::hsvcolor::HSVColor;
pub use self::rgbcolor::RGBColor;
pub use self::xyycolor::XYYColor;
pub use self::xyzcolor::XYZColor;
