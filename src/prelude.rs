//! This module simply brings the most common Skyview functionality under a single namespace, to
//! prevent excessive imports. It includes the [`Bound`] trait, the [`Color`] sum type with the
//! ubiquitous [`RGBColor`], and the pipeline types from [`Sun`] to [`SkyUpdater`]. The other
//! concrete color spaces in [`colors`](../colors/index.html) are not included.

pub use crate::bound::Bound;
pub use crate::color::{Color, ColorSpace};
pub use crate::colors::RGBColor;
pub use crate::config::SkyConfig;
pub use crate::display::Display;
pub use crate::skygrid::SkyGrid;
pub use crate::skymodel::SkyModel;
pub use crate::sun::Sun;
pub use crate::updater::{SkyUpdater, UpdateOutcome};
