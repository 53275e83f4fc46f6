//! Pure-computation RGBA8 buffers for the color views.
//!
//! Always available (no feature gate) so a windowing front end can upload
//! these buffers directly, while [`crate::snapshot`] writes them as PNG.

use tincture_core::model::hsv_to_rgb;
use tincture_core::{ColorError, PickerGeometry, Rgb};

const MARKER_RADIUS: f64 = 10.0;
/// Half-widths of the marker ring strokes: white outline, black core.
const MARKER_OUTER: f64 = 2.0;
const MARKER_INNER: f64 = 1.0;

/// A row-major RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a transparent buffer.
    ///
    /// Returns `ColorError::InvalidDimensions` if either side is zero or the
    /// byte length overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self, ColorError> {
        if width == 0 || height == 0 {
            return Err(ColorError::InvalidDimensions);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(ColorError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, `width * height * 4` long.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Opaque color at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.index(x, y)?;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[i..i + 4]);
        Some(px)
    }

    /// Writes an opaque pixel; out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u32, y: u32, rgb: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&[rgb.r, rgb.g, rgb.b, 255]);
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

/// Renders the saturation/value square for `hue`.
///
/// Saturation grows left to right and value falls top to bottom, so pixel
/// `(x, y)` is `hsv(hue, x / size * 100, (1 - y / size) * 100)`. When `marker`
/// holds a `(saturation, value)` pair, a ring is drawn around its position.
pub fn picker_rgba(
    geometry: &PickerGeometry,
    hue: f64,
    marker: Option<(f64, f64)>,
) -> Result<PixelBuffer, ColorError> {
    let size = geometry.size;
    let mut buf = PixelBuffer::new(size, size)?;
    let edge = size as f64;
    for y in 0..size {
        let value = (1.0 - y as f64 / edge) * 100.0;
        for x in 0..size {
            let saturation = x as f64 / edge * 100.0;
            buf.set(x, y, hsv_to_rgb(hue, saturation, value));
        }
    }
    if let Some((saturation, value)) = marker {
        draw_marker(&mut buf, geometry.marker(saturation, value));
    }
    Ok(buf)
}

/// Renders a horizontal hue slider track covering 0..360 at full saturation.
pub fn hue_strip_rgba(width: u32, height: u32) -> Result<PixelBuffer, ColorError> {
    let mut buf = PixelBuffer::new(width, height)?;
    for x in 0..width {
        let rgb = hsv_to_rgb(x as f64 / width as f64 * 360.0, 100.0, 100.0);
        for y in 0..height {
            buf.set(x, y, rgb);
        }
    }
    Ok(buf)
}

/// Lays out square swatches side by side, one per color.
pub fn swatch_rgba(colors: &[Rgb], swatch: u32) -> Result<PixelBuffer, ColorError> {
    let count = u32::try_from(colors.len()).map_err(|_| ColorError::InvalidDimensions)?;
    let width = count
        .checked_mul(swatch)
        .ok_or(ColorError::InvalidDimensions)?;
    let mut buf = PixelBuffer::new(width, swatch)?;
    for (i, &rgb) in colors.iter().enumerate() {
        let x0 = i as u32 * swatch;
        for y in 0..swatch {
            for x in x0..x0 + swatch {
                buf.set(x, y, rgb);
            }
        }
    }
    Ok(buf)
}

/// Two-tone ring around `centre`: a white outline with a black core.
fn draw_marker(buf: &mut PixelBuffer, centre: (u32, u32)) {
    let (cx, cy) = (centre.0 as f64, centre.1 as f64);
    let reach = MARKER_RADIUS + MARKER_OUTER;
    let x_range = (cx - reach).max(0.0) as u32..=(cx + reach) as u32;
    for y in (cy - reach).max(0.0) as u32..=(cy + reach) as u32 {
        for x in x_range.clone() {
            let d = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
            let off = (d - MARKER_RADIUS).abs();
            if off <= MARKER_INNER {
                buf.set(x, y, Rgb::BLACK);
            } else if off <= MARKER_OUTER {
                buf.set(x, y, Rgb::WHITE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_at(buf: &PixelBuffer, x: u32, y: u32) -> Rgb {
        let [r, g, b, _] = buf.pixel(x, y).unwrap();
        Rgb::new(r, g, b)
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(PixelBuffer::new(0, 4), Err(ColorError::InvalidDimensions));
        assert_eq!(PixelBuffer::new(4, 0), Err(ColorError::InvalidDimensions));
    }

    #[test]
    fn new_buffer_is_transparent_with_correct_length() {
        let buf = PixelBuffer::new(8, 4).unwrap();
        assert_eq!(buf.data().len(), 8 * 4 * 4);
        assert!(buf.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn out_of_bounds_access_is_harmless() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.set(5, 5, Rgb::RED);
        assert_eq!(buf.pixel(2, 0), None);
        assert!(buf.into_data().iter().all(|&b| b == 0));
    }

    #[test]
    fn picker_corners() {
        let geometry = PickerGeometry::default();
        let buf = picker_rgba(&geometry, 0.0, None).unwrap();
        assert_eq!(buf.width(), 316);
        assert_eq!(rgb_at(&buf, 0, 0), Rgb::WHITE);
        // Top right approaches the pure hue.
        let top_right = rgb_at(&buf, 315, 0);
        assert_eq!(top_right.r, 255);
        assert!(top_right.g <= 1 && top_right.b <= 1, "{top_right}");
        // Bottom row approaches black.
        let bottom = rgb_at(&buf, 100, 315);
        assert!(bottom.r <= 1, "{bottom}");
    }

    #[test]
    fn picker_alpha_always_255() {
        let geometry = PickerGeometry {
            size: 32,
            margin: 2,
            span: 28,
        };
        let buf = picker_rgba(&geometry, 200.0, Some((50.0, 50.0))).unwrap();
        assert_eq!(buf.data().len(), 32 * 32 * 4);
        for (i, &byte) in buf.data().iter().enumerate() {
            if i % 4 == 3 {
                assert_eq!(byte, 255, "alpha at pixel {} should be 255", i / 4);
            }
        }
    }

    #[test]
    fn marker_ring_is_drawn_at_saturation_value() {
        let geometry = PickerGeometry::default();
        let buf = picker_rgba(&geometry, 0.0, Some((50.0, 50.0))).unwrap();
        let (cx, cy) = geometry.marker(50.0, 50.0);
        assert_eq!(rgb_at(&buf, cx + 10, cy), Rgb::BLACK);
        assert_eq!(rgb_at(&buf, cx, cy - 10), Rgb::BLACK);
        // Centre keeps the gradient color.
        assert_eq!(rgb_at(&buf, cx, cy), hsv_to_rgb(0.0, 50.0, 50.0));
    }

    #[test]
    fn marker_near_edge_does_not_panic() {
        let geometry = PickerGeometry::default();
        assert!(picker_rgba(&geometry, 90.0, Some((0.0, 100.0))).is_ok());
        assert!(picker_rgba(&geometry, 90.0, Some((100.0, 0.0))).is_ok());
    }

    #[test]
    fn hue_strip_starts_red_and_passes_cyan() {
        let buf = hue_strip_rgba(360, 4).unwrap();
        assert_eq!(rgb_at(&buf, 0, 0), Rgb::RED);
        assert_eq!(rgb_at(&buf, 180, 3), Rgb::new(0, 255, 255));
        assert_eq!(rgb_at(&buf, 120, 2), Rgb::new(0, 255, 0));
    }

    #[test]
    fn swatches_are_laid_out_left_to_right() {
        let colors = [Rgb::RED, Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)];
        let buf = swatch_rgba(&colors, 10).unwrap();
        assert_eq!((buf.width(), buf.height()), (30, 10));
        assert_eq!(rgb_at(&buf, 0, 0), Rgb::RED);
        assert_eq!(rgb_at(&buf, 15, 9), Rgb::new(0, 255, 0));
        assert_eq!(rgb_at(&buf, 29, 5), Rgb::new(0, 0, 255));
    }

    #[test]
    fn swatches_reject_empty_input() {
        assert_eq!(swatch_rgba(&[], 10), Err(ColorError::InvalidDimensions));
        assert_eq!(swatch_rgba(&[Rgb::RED], 0), Err(ColorError::InvalidDimensions));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn picker_pixel_matches_hsv(hue in 0.0_f64..360.0, x in 0_u32..64, y in 0_u32..64) {
                let geometry = PickerGeometry { size: 64, margin: 0, span: 64 };
                let buf = picker_rgba(&geometry, hue, None).unwrap();
                let expected = hsv_to_rgb(hue, x as f64 / 64.0 * 100.0, (1.0 - y as f64 / 64.0) * 100.0);
                prop_assert_eq!(rgb_at(&buf, x, y), expected);
            }
        }
    }
}
