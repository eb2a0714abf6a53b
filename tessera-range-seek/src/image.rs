//! Custom handle imagery.
//!
//! ## Usage
//!
//! Decode an image once with [`load_handle_image`], or generate a round
//! colour swatch with [`HandleImage::solid`], and hand it to
//! [`RangeSeekSlider::set_left_handle_image`](crate::RangeSeekSlider::set_left_handle_image).
//! Only the image's size takes part in layout; the pixels are passed through
//! to the renderer untouched.
use std::sync::Arc;

use image::{GenericImageView, Rgba, RgbaImage};

use crate::{color::Color, error::ConfigError, geometry::Size};

/// Edge length of the swatch produced by [`HandleImage::solid`].
pub const SWATCH_SIZE: u32 = 32;

/// Specifies where handle image data comes from.
#[derive(Clone, PartialEq, Debug)]
pub enum ImageSource {
    /// Load image from a file path.
    Path(String),
    /// Load image from a byte slice.
    Bytes(Arc<[u8]>),
}

/// Decoded RGBA8 pixels of a handle image.
#[derive(Clone, PartialEq, Debug)]
pub struct HandleImage {
    /// Row-major RGBA8 pixels.
    pub data: Arc<Vec<u8>>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl HandleImage {
    /// The layout size of the image, one unit per pixel.
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// A filled circle of `color`, [`SWATCH_SIZE`] pixels across.
    pub fn solid(color: Color) -> Self {
        let radius = SWATCH_SIZE as f32 / 2.0;
        Self::rounded(color, SWATCH_SIZE, SWATCH_SIZE, radius)
    }

    /// A rounded rectangle of `color`. Pixels outside the rounded corners are
    /// fully transparent.
    pub fn rounded(color: Color, width: u32, height: u32, corner_radius: f32) -> Self {
        let fill = Rgba(color.to_rgba_u8());
        let clear = Rgba([0, 0, 0, 0]);
        let (w, h) = (width as f32, height as f32);
        let radius = corner_radius.clamp(0.0, w.min(h) / 2.0);

        let pixels = RgbaImage::from_fn(width, height, |x, y| {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            // Nearest point of the inner rectangle whose corners carry the arcs.
            let cx = px.clamp(radius, w - radius);
            let cy = py.clamp(radius, h - radius);
            let (dx, dy) = (px - cx, py - cy);
            if dx * dx + dy * dy <= radius * radius {
                fill
            } else {
                clear
            }
        });

        Self {
            data: Arc::new(pixels.into_raw()),
            width,
            height,
        }
    }
}

/// Decodes a handle image from a given [`ImageSource`].
///
/// Call this outside of the gesture path; decoding is comparatively slow.
pub fn load_handle_image(source: &ImageSource) -> Result<HandleImage, ConfigError> {
    let decoded = match source {
        ImageSource::Path(path) => image::open(path)?,
        ImageSource::Bytes(bytes) => image::load_from_memory(bytes)?,
    };
    let (width, height) = decoded.dimensions();
    Ok(HandleImage {
        data: Arc::new(decoded.to_rgba8().into_raw()),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::ImageFormat;

    use super::*;

    fn pixel(image: &HandleImage, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * image.width + x) * 4) as usize;
        let mut out = [0; 4];
        out.copy_from_slice(&image.data[offset..offset + 4]);
        out
    }

    #[test]
    fn solid_swatch_is_a_circle() {
        let swatch = HandleImage::solid(Color::WHITE);
        assert_eq!(swatch.size(), Size::square(32.0));
        assert_eq!(swatch.data.len(), 32 * 32 * 4);
        assert_eq!(pixel(&swatch, 16, 16), [255, 255, 255, 255]);
        assert_eq!(pixel(&swatch, 0, 0), [0, 0, 0, 0]);
        assert_eq!(pixel(&swatch, 31, 31), [0, 0, 0, 0]);
    }

    #[test]
    fn square_corners_fill_everything() {
        let image = HandleImage::rounded(Color::BLACK, 4, 2, 0.0);
        assert!(image.data.chunks(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn decodes_png_bytes() {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(3, 5, Rgba([1, 2, 3, 4]))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        let image = load_handle_image(&ImageSource::Bytes(bytes.into())).expect("decode png");
        assert_eq!((image.width, image.height), (3, 5));
        assert_eq!(pixel(&image, 2, 4), [1, 2, 3, 4]);
    }

    #[test]
    fn garbage_bytes_are_an_error() {
        let result = load_handle_image(&ImageSource::Bytes(Arc::from(&b"nope"[..])));
        assert!(matches!(result, Err(ConfigError::Image(_))));
    }
}
