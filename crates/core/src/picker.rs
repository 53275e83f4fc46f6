//! Geometry of the 2D saturation/value picker.
//!
//! The picker maps a pointer position inside its active square to a
//! saturation (left to right, 0 to 100) and a value (bottom to top, 0 to 100).
//! The hue is not part of the position; it comes from the hue slider.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::clamp_percent;
use crate::params::param_u32;

const DEFAULT_SIZE: u32 = 316;
const DEFAULT_MARGIN: u32 = 12;
const DEFAULT_SPAN: u32 = 292;

/// Picker canvas size and active area, in pixels.
///
/// `size` is the edge of the rendered gradient square. Pointer positions are
/// accepted in `[margin, margin + span]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerGeometry {
    pub size: u32,
    pub margin: u32,
    pub span: u32,
}

impl Default for PickerGeometry {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            margin: DEFAULT_MARGIN,
            span: DEFAULT_SPAN,
        }
    }
}

impl PickerGeometry {
    /// Reads `size`, `margin` and `span` from a JSON object.
    ///
    /// Missing or invalid keys keep their defaults. A zero `size` or `span`
    /// is replaced by the default so the geometry is always usable.
    pub fn from_json(params: &Value) -> Self {
        let size = match param_u32(params, "size", DEFAULT_SIZE) {
            0 => DEFAULT_SIZE,
            n => n,
        };
        let span = match param_u32(params, "span", DEFAULT_SPAN) {
            0 => DEFAULT_SPAN,
            n => n,
        };
        Self {
            size,
            margin: param_u32(params, "margin", DEFAULT_MARGIN),
            span,
        }
    }

    /// Whether `(x, y)` falls inside the active area (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let lo = self.margin as f64;
        let hi = lo + self.span as f64;
        (lo..=hi).contains(&x) && (lo..=hi).contains(&y)
    }

    /// Saturation and value percentages for a pointer position.
    ///
    /// Returns `None` outside the active area; callers ignore such presses.
    pub fn saturation_value(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !self.contains(x, y) {
            return None;
        }
        let span = self.span as f64;
        let nx = (x - self.margin as f64) / span;
        let ny = (y - self.margin as f64) / span;
        Some((clamp_percent(nx * 100.0), clamp_percent((1.0 - ny) * 100.0)))
    }

    /// Marker centre on the rendered canvas for a saturation/value pair.
    pub fn marker(&self, saturation: f64, value: f64) -> (u32, u32) {
        let size = self.size as f64;
        let x = clamp_percent(saturation) / 100.0 * size;
        let y = (1.0 - clamp_percent(value) / 100.0) * size;
        (x as u32, y as u32)
    }
}
