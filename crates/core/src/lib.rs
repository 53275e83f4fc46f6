#![deny(unsafe_code)]
//! Core of the tincture color converter.
//!
//! Provides the canonical `Rgb` color and its derived representations
//! (`Hsv`, `Hsl`, `Cmyk`, `Yuv`, hex), the pure conversion functions in
//! [`model`], harmony schemes, picker geometry, and [`ColorState`], the
//! single-threaded synchronization controller that keeps every view of the
//! current color consistent.

pub mod color;
pub mod config;
pub mod error;
pub mod harmony;
pub mod model;
pub mod params;
pub mod picker;
pub mod state;

pub use color::{Cmyk, Hsl, Hsv, Rgb, Yuv};
pub use config::StateConfig;
pub use error::ColorError;
pub use harmony::{Harmony, Scheme};
pub use picker::PickerGeometry;
pub use state::{ColorBundle, ColorState, ObserverId, Outcome, PickerState};
