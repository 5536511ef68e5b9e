//! Image decoding for decal files and bundled assets.
//!
//! Decoding never errors out to the caller: bad data simply yields `None`,
//! and callers decide whether to skip the asset or show an error state.

use std::io::Cursor;
use std::path::Path;

use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use image::{ImageFormat, RgbaImage};

/// An in-memory RGBA8 bitmap.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pixels: RgbaImage,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Encode as PNG, the canonical on-disk format.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut out = Cursor::new(Vec::new());
        self.pixels.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Convert into a Bevy texture usable by `ImageNode`.
    pub fn into_bevy_image(self) -> Image {
        let (width, height) = self.pixels.dimensions();
        Image::new(
            Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            self.pixels.into_raw(),
            TextureFormat::Rgba8UnormSrgb,
            default(),
        )
    }
}

/// Decode raw encoded bytes (PNG, JPEG, ...) into a bitmap.
pub fn decode_image(bytes: &[u8]) -> Option<DecodedImage> {
    if bytes.is_empty() {
        debug!("Refusing to decode empty buffer");
        return None;
    }

    match image::load_from_memory(bytes) {
        Ok(img) => Some(DecodedImage {
            pixels: img.to_rgba8(),
        }),
        Err(e) => {
            debug!("Image decode failed: {}", e);
            None
        }
    }
}

/// Read a file from disk and decode it.
pub fn decode_file(path: &Path) -> Option<DecodedImage> {
    match std::fs::read(path) {
        Ok(bytes) => decode_image(&bytes),
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decals::test_support::png_bytes;

    #[test]
    fn test_decode_valid_png() {
        let decoded = decode_image(&png_bytes(8, 4, [10, 20, 30, 255])).unwrap();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 4);
    }

    #[test]
    fn test_decode_empty_buffer() {
        assert!(decode_image(&[]).is_none());
    }

    #[test]
    fn test_decode_garbage() {
        assert!(decode_image(b"definitely not an image").is_none());
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(16, 16, [255, 0, 0, 255]);
        assert!(decode_image(&bytes[..bytes.len() / 2]).is_none());
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(decode_file(&dir.path().join("nope.png")).is_none());
    }

    #[test]
    fn test_bevy_image_keeps_dimensions() {
        let decoded = decode_image(&png_bytes(5, 3, [1, 2, 3, 4])).unwrap();
        let image = decoded.into_bevy_image();
        assert_eq!(image.width(), 5);
        assert_eq!(image.height(), 3);
    }

    #[test]
    fn test_png_reencode_decodes_again() {
        let decoded = decode_image(&png_bytes(2, 2, [9, 9, 9, 255])).unwrap();
        let bytes = decoded.to_png_bytes().unwrap();
        assert_eq!(decode_image(&bytes).unwrap().width(), 2);
    }
}
