//! Pure conversion functions between RGB and the derived color models.
//!
//! Outbound conversions (`rgb_to_*`) come in two flavors: a `*_precise`
//! variant returning unrounded `f64` components, and the plain variant
//! returning the rounded integer type shown to users. Inbound conversions
//! (`*_to_rgb`) take `f64` so fractional or out-of-range input is accepted:
//! hues wrap modulo 360, percentages clamp to [0, 100], NaN reads as 0.
//!
//! Round-tripping through the precise variants reproduces the input within
//! one unit per channel. The rounded variants are quantized to 1 degree / 1 %
//! and do not carry that guarantee.

use crate::color::{Cmyk, Hsl, Hsv, Rgb, Yuv};
use crate::error::ColorError;

// -- Hex --

/// Formats a color as `#RRGGBB` with uppercase digits.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Parses `"#RRGGBB"` or `"RRGGBB"`, case insensitive.
///
/// Anything other than exactly six ASCII hex digits after an optional `#` is
/// rejected, so a failed parse is distinguishable from a parsed black.
pub fn parse_hex(text: &str) -> Result<Rgb, ColorError> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 6 {
        return Err(ColorError::invalid_hex(
            text,
            format!("expected 6 hex digits, got {}", digits.len()),
        ));
    }
    // `from_str_radix` alone would also accept a leading '+'.
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_hex(
            text,
            format!("'{bad}' is not a hex digit"),
        ));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|e| ColorError::invalid_hex(text, e.to_string()))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Best-effort parse: malformed input yields black instead of an error.
///
/// Use [`parse_hex`] when a failed parse must not be mistaken for `#000000`.
pub fn hex_to_rgb(text: &str) -> Rgb {
    parse_hex(text).unwrap_or_default()
}

// -- HSV --

/// RGB to HSV as `(hue degrees in [0, 360), saturation %, value %)`, unrounded.
pub fn rgb_to_hsv_precise(rgb: Rgb) -> (f64, f64, f64) {
    let [r, g, b] = unit(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let s = if max > 0.0 { (max - min) / max } else { 0.0 };
    (hue_of(r, g, b, max, min), s * 100.0, max * 100.0)
}

/// RGB to rounded HSV.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (h, s, v) = rgb_to_hsv_precise(rgb);
    Hsv {
        h: round_hue(h),
        s: round_percent(s),
        v: round_percent(v),
    }
}

/// HSV to RGB. `h` wraps modulo 360; `s` and `v` are clamped to [0, 100].
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = wrap_hue(h);
    let s = clamp_percent(s) / 100.0;
    let v = clamp_percent(v) / 100.0;
    let chroma = v * s;
    let (r, g, b) = hue_sector(h, chroma);
    let m = v - chroma;
    from_unit(r + m, g + m, b + m)
}

// -- HSL --

/// RGB to HSL as `(hue degrees, saturation %, lightness %)`, unrounded.
pub fn rgb_to_hsl_precise(rgb: Rgb) -> (f64, f64, f64) {
    let [r, g, b] = unit(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;
    let s = if delta > 0.0 {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    } else {
        0.0
    };
    (hue_of(r, g, b, max, min), s * 100.0, l * 100.0)
}

/// RGB to rounded HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (h, s, l) = rgb_to_hsl_precise(rgb);
    Hsl {
        h: round_hue(h),
        s: round_percent(s),
        l: round_percent(l),
    }
}

/// HSL to RGB. `h` wraps modulo 360; `s` and `l` are clamped to [0, 100].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = wrap_hue(h);
    let s = clamp_percent(s) / 100.0;
    let l = clamp_percent(l) / 100.0;
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let (r, g, b) = hue_sector(h, chroma);
    let m = l - chroma / 2.0;
    from_unit(r + m, g + m, b + m)
}

// -- CMYK --

/// RGB to CMYK percentages, unrounded.
///
/// Pure black short-circuits to `(0, 0, 0, 100)`; the general formula would
/// divide by `1 - k == 0` there.
pub fn rgb_to_cmyk_precise(rgb: Rgb) -> (f64, f64, f64, f64) {
    let [r, g, b] = unit(rgb);
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return (0.0, 0.0, 0.0, 100.0);
    }
    let ink = |channel: f64| (1.0 - channel - k) / (1.0 - k) * 100.0;
    (ink(r), ink(g), ink(b), k * 100.0)
}

/// RGB to rounded CMYK.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let (c, m, y, k) = rgb_to_cmyk_precise(rgb);
    Cmyk {
        c: round_percent(c),
        m: round_percent(m),
        y: round_percent(y),
        k: round_percent(k),
    }
}

/// CMYK to RGB. All inputs are clamped to [0, 100] first.
pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> Rgb {
    let key = 1.0 - clamp_percent(k) / 100.0;
    let channel = |ink: f64| (1.0 - clamp_percent(ink) / 100.0) * key;
    from_unit(channel(c), channel(m), channel(y))
}

// -- YUV --

/// RGB to BT.601 YUV on the 0-255 scale with chroma offset by 128, unrounded.
pub fn rgb_to_yuv_precise(rgb: Rgb) -> (f64, f64, f64) {
    let (r, g, b) = (rgb.r as f64, rgb.g as f64, rgb.b as f64);
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let u = -0.147 * r - 0.289 * g + 0.436 * b + 128.0;
    let v = 0.615 * r - 0.515 * g - 0.100 * b + 128.0;
    (y, u, v)
}

/// RGB to rounded YUV.
pub fn rgb_to_yuv(rgb: Rgb) -> Yuv {
    let (y, u, v) = rgb_to_yuv_precise(rgb);
    Yuv {
        y: y.round() as i16,
        u: u.round() as i16,
        v: v.round() as i16,
    }
}

/// YUV to RGB. The reconstructed channels are rounded then clamped to [0, 255].
pub fn yuv_to_rgb(y: f64, u: f64, v: f64) -> Rgb {
    let y = finite_or_zero(y);
    let u = finite_or_zero(u) - 128.0;
    let v = finite_or_zero(v) - 128.0;
    let r = y + 1.140 * v;
    let g = y - 0.395 * u - 0.581 * v;
    let b = y + 2.032 * u;
    Rgb::new(round_channel(r), round_channel(g), round_channel(b))
}

// -- Shared helpers --

/// Wraps a hue into [0, 360). Non-finite input maps to 0.
pub fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamps a percentage into [0, 100]. NaN maps to 0.
pub fn clamp_percent(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 100.0)
    }
}

fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

fn unit(rgb: Rgb) -> [f64; 3] {
    [
        rgb.r as f64 / 255.0,
        rgb.g as f64 / 255.0,
        rgb.b as f64 / 255.0,
    ]
}

fn from_unit(r: f64, g: f64, b: f64) -> Rgb {
    Rgb::new(
        round_channel(r * 255.0),
        round_channel(g * 255.0),
        round_channel(b * 255.0),
    )
}

fn round_channel(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    x.round().clamp(0.0, 255.0) as u8
}

fn round_percent(x: f64) -> u8 {
    clamp_percent(x.round()) as u8
}

/// Rounds a wrapped hue, folding 359.5.. back onto 0.
fn round_hue(h: f64) -> u16 {
    (h.round() as u16) % 360
}

/// Hue in degrees shared by HSV and HSL. Achromatic colors report 0.
fn hue_of(r: f64, g: f64, b: f64, max: f64, min: f64) -> f64 {
    let delta = max - min;
    if delta <= 0.0 {
        return 0.0;
    }
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    wrap_hue(sector * 60.0)
}

/// Chroma-scaled RGB (before lightness offset) for a hue in [0, 360).
fn hue_sector(h: f64, chroma: f64) -> (f64, f64, f64) {
    let hp = h / 60.0;
    let x = chroma * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    match hp as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    }
}
