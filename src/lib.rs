//! Skyview is the physical core of a panoramic sky display: it works out where the sun is for a
//! given observer and instant, predicts the colour of the clear daytime sky in any direction with
//! the Perez/Preetham analytic model, and carries that prediction through the CIE colour spaces
//! down to gamma-corrected RGB that a renderer can draw. There is no windowing, texture or network
//! code here: the host application feeds in time and configuration and gets back numbers.
//!
//! The usual flow is [`sun::Sun`] → [`skymodel::SkyModel`] → [`display::Display`], and
//! [`updater::SkyUpdater`] strings those together over a [`skygrid::SkyGrid`] on a timer.

#![doc(html_root_url = "https://docs.rs/skyview/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate chrono;
extern crate csv;
extern crate float_cmp;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate num;
extern crate ron;
#[macro_use]
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate thiserror;

pub mod bound;
pub mod color;
pub mod colors;
pub mod config;
mod consts;
pub mod coord;
pub mod display;
pub mod error;
pub mod prelude;
pub mod sidereal;
pub mod skygrid;
pub mod skymodel;
pub mod sun;
pub mod updater;
