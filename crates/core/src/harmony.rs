//! Harmony schemes: fixed hue offsets around a base color.
//!
//! Saturation and value are held from the base color; only the hue rotates.
//! Every generated hue is wrapped into [0, 360).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Hsv, Rgb};
use crate::error::ColorError;
use crate::model::{hsv_to_rgb, wrap_hue};

/// A named set of hue offsets relative to a base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Base and base+180.
    Complementary,
    /// Base, base+30, base-30.
    Analogous,
    /// Base, base+120, base+240.
    Triadic,
    /// Base, base+90, base+180, base+270.
    Tetradic,
}

impl Scheme {
    pub const ALL: [Scheme; 4] = [
        Scheme::Complementary,
        Scheme::Analogous,
        Scheme::Triadic,
        Scheme::Tetradic,
    ];

    /// Signed hue offsets in degrees, base first.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            Scheme::Complementary => &[0.0, 180.0],
            Scheme::Analogous => &[0.0, 30.0, -30.0],
            Scheme::Triadic => &[0.0, 120.0, 240.0],
            Scheme::Tetradic => &[0.0, 90.0, 180.0, 270.0],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Complementary => "complementary",
            Scheme::Analogous => "analogous",
            Scheme::Triadic => "triadic",
            Scheme::Tetradic => "tetradic",
        }
    }

    /// Returns all scheme names, in display order.
    pub fn list_names() -> Vec<&'static str> {
        Scheme::ALL.iter().map(|s| s.name()).collect()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::UnknownScheme(s.to_string()))
    }
}

/// Hues of `scheme` around `base_hue`, each wrapped into [0, 360).
pub fn harmony_angles(scheme: Scheme, base_hue: f64) -> Vec<f64> {
    let base = wrap_hue(base_hue);
    scheme
        .offsets()
        .iter()
        .map(|offset| wrap_hue(base + offset))
        .collect()
}

/// Swatch colors for `scheme`, holding saturation and value from `base`.
pub fn harmony_colors(scheme: Scheme, base: Hsv) -> Vec<Rgb> {
    harmony_angles(scheme, base.h as f64)
        .into_iter()
        .map(|h| hsv_to_rgb(h, base.s as f64, base.v as f64))
        .collect()
}

/// A generated harmony, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Harmony {
    pub scheme: Scheme,
    pub base: Hsv,
    pub hues: Vec<u16>,
    pub colors: Vec<Rgb>,
}

impl Harmony {
    pub fn new(scheme: Scheme, base: Hsv) -> Self {
        let hues = harmony_angles(scheme, base.h as f64)
            .into_iter()
            .map(|h| h.round() as u16 % 360)
            .collect();
        Self {
            scheme,
            base,
            hues,
            colors: harmony_colors(scheme, base),
        }
    }
}
