//! Color value types.
//!
//! [`Rgb`] is the canonical representation: an 8-bit-per-channel triple from
//! which every other representation is derived. The derived types ([`Hsv`],
//! [`Hsl`], [`Cmyk`], [`Yuv`]) hold the rounded integer values shown to the
//! user; the conversions that produce them live in [`crate::model`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;
use crate::model;

/// 8-bit sRGB color, the single source of truth.
///
/// Serializes as a hex string `"#RRGGBB"`. Because hex is an exact encoding of
/// three bytes, the serde round-trip is lossless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Session default.
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from unbounded integers, clamping each channel to [0, 255].
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Parses `"#RRGGBB"` or `"RRGGBB"` (case insensitive).
    ///
    /// Returns `ColorError::InvalidHex` on any other input.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        model::parse_hex(hex)
    }

    /// Canonical uppercase hex form, e.g. `"#FF0000"`.
    pub fn to_hex(self) -> String {
        model::rgb_to_hex(self)
    }

    /// Channels as a `[r, g, b]` array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Largest per-channel absolute difference between two colors.
    pub fn max_channel_diff(self, other: Rgb) -> u8 {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .map(|(&a, &b)| a.abs_diff(b))
            .max()
            .unwrap_or(0)
    }
}

fn clamp_channel(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Accepts either a hex color (`#RRGGBB` / `RRGGBB`) or three comma-separated
/// integers (`"12, 200, 300"`); the integer form is clamped, never rejected.
impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.contains(',') {
            return Rgb::from_hex(s);
        }
        let parts = parse_components(s, 3)?;
        Ok(Rgb::clamped(
            parts[0].round() as i64,
            parts[1].round() as i64,
            parts[2].round() as i64,
        ))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Hue/saturation/value, rounded: `h` in [0, 360), `s` and `v` in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

/// Hue/saturation/lightness, rounded: `h` in [0, 360), `s` and `l` in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Cyan/magenta/yellow/key percentages in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// BT.601-style luma and chroma, rounded.
///
/// `u` and `v` are offset by 128. Strongly saturated inputs push them slightly
/// outside [0, 255] (pure red has `v == 285`), hence the signed storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Yuv {
    pub y: i16,
    pub u: i16,
    pub v: i16,
}

impl From<Hsv> for Rgb {
    fn from(c: Hsv) -> Self {
        model::hsv_to_rgb(c.h as f64, c.s as f64, c.v as f64)
    }
}

impl From<Hsl> for Rgb {
    fn from(c: Hsl) -> Self {
        model::hsl_to_rgb(c.h as f64, c.s as f64, c.l as f64)
    }
}

impl From<Cmyk> for Rgb {
    fn from(c: Cmyk) -> Self {
        model::cmyk_to_rgb(c.c as f64, c.m as f64, c.y as f64, c.k as f64)
    }
}

impl From<Yuv> for Rgb {
    fn from(c: Yuv) -> Self {
        model::yuv_to_rgb(c.y as f64, c.u as f64, c.v as f64)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSV({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSL({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CMYK({}%, {}%, {}%, {}%)",
            self.c, self.m, self.y, self.k
        )
    }
}

impl fmt::Display for Yuv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YUV({}, {}, {})", self.y, self.u, self.v)
    }
}

/// Splits `"a, b, c"` into exactly `arity` numbers.
///
/// Used for textual input of the non-hex models (`"210, 100, 50"` for HSL).
pub fn parse_components(text: &str, arity: usize) -> Result<Vec<f64>, ColorError> {
    let values = text
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|_| ColorError::InvalidComponents(format!("'{part}' is not a number")))
        })
        .collect::<Result<Vec<f64>, ColorError>>()?;
    if values.len() != arity {
        return Err(ColorError::InvalidComponents(format!(
            "expected {arity} values, got {}",
            values.len()
        )));
    }
    Ok(values)
}
