//! PNG output of a [`PixelBuffer`].
//!
//! Feature-gated behind `png` (default on) so front ends that only need the
//! raw buffers can depend on this crate without pulling in `image`.

use std::path::Path;

use tincture_core::ColorError;

use crate::pixel::PixelBuffer;

/// Writes a pixel buffer as a PNG image.
///
/// Returns `ColorError::Io` on write failure.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), ColorError> {
    let img = image::RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.data().to_vec())
        .ok_or_else(|| ColorError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| ColorError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{picker_rgba, swatch_rgba};
    use tincture_core::{PickerGeometry, Rgb};

    #[test]
    fn write_png_round_trip() {
        let buffer = swatch_rgba(&[Rgb::RED, Rgb::new(0, 0, 255)], 8).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatches.png");

        write_png(&buffer, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 8);
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(15, 7).0, [0, 0, 255, 255]);
    }

    #[test]
    fn write_png_picker_snapshot() {
        let buffer = picker_rgba(&PickerGeometry::default(), 120.0, Some((80.0, 60.0))).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.png");
        write_png(&buffer, &path).unwrap();
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (316, 316));
    }

    #[test]
    fn write_png_to_missing_directory_is_io_error() {
        let buffer = swatch_rgba(&[Rgb::RED], 4).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        assert!(matches!(write_png(&buffer, &path), Err(ColorError::Io(_))));
    }
}
