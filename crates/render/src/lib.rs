#![deny(unsafe_code)]
//! CPU-side rendering for tincture's color views.
//!
//! The core never touches pixels. This crate turns its state into RGBA8
//! buffers for the saturation/value picker, the hue slider track and harmony
//! swatches, and (with the `png` feature) writes them to disk.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{hue_strip_rgba, picker_rgba, swatch_rgba, PixelBuffer};
