use std::path::Path;

use image::{DynamicImage, GenericImageView};
use log::debug;

use super::pixels::PixelBuffer;
use crate::RenderError;

/// Decoded image samples in their native channel layout, narrowed to 8 bits.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl DecodedImage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let image = image::open(path)?;
        let decoded = Self::from_image(image);
        debug!(
            "decoded {} as {}x{} with {} channels",
            path.display(),
            decoded.width,
            decoded.height,
            decoded.channels
        );
        Ok(decoded)
    }

    pub fn from_image(image: DynamicImage) -> Self {
        let color = image.color();
        let (width, height) = image.dimensions();
        let (data, channels) = match (color.has_color(), color.has_alpha()) {
            (false, false) => (image.into_luma8().into_raw(), 1),
            (false, true) => (image.into_luma_alpha8().into_raw(), 2),
            (true, false) => (image.into_rgb8().into_raw(), 3),
            (true, true) => (image.into_rgba8().into_raw(), 4),
        };
        Self { data, width, height, channels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Borrow the samples as a validated pixel buffer.
    pub fn pixels(&self) -> Result<PixelBuffer<'_>, RenderError> {
        PixelBuffer::new(&self.data, self.width, self.height, self.channels)
    }
}

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn keeps_native_channel_count() {
        let gray = DecodedImage::from_image(DynamicImage::ImageLuma8(GrayImage::from_pixel(
            3,
            2,
            Luma([9]),
        )));
        assert_eq!((gray.width(), gray.height(), gray.channels()), (3, 2, 1));

        let rgb = DecodedImage::from_image(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            2,
            2,
            Rgb([1, 2, 3]),
        )));
        assert_eq!(rgb.channels(), 3);
        assert_eq!(rgb.pixels().unwrap().rgb_at(1, 1), [1, 2, 3]);

        let rgba = DecodedImage::from_image(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            1,
            1,
            Rgba([4, 5, 6, 0]),
        )));
        assert_eq!(rgba.channels(), 4);
        assert_eq!(rgba.pixels().unwrap().rgb_at(0, 0), [4, 5, 6]);
    }

    #[test]
    fn narrows_sixteen_bit_samples() {
        let buffer = image::ImageBuffer::from_pixel(1, 1, Luma([u16::MAX]));
        let decoded = DecodedImage::from_image(DynamicImage::ImageLuma16(buffer));
        assert_eq!(decoded.channels(), 1);
        assert_eq!(decoded.pixels().unwrap().rgb_at(0, 0), [255, 255, 255]);
    }

    #[test]
    fn missing_file_is_an_image_error() {
        let err = DecodedImage::open("/nonexistent/imgtext/input.png").unwrap_err();
        assert!(matches!(err, RenderError::Image(_)));
    }
}
