use crate::{InvalidInput, RenderError};

/// Read-only view over interleaved 8-bit samples.
#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    channels: u8,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data`, checking the dimensions against its length.
    ///
    /// `channels` counts interleaved samples per pixel and must be 1 to 4.
    pub fn new(data: &'a [u8], width: u32, height: u32, channels: u8) -> Result<Self, RenderError> {
        if width == 0 {
            return Err(InvalidInput::ZeroWidth.into());
        }
        if height == 0 {
            return Err(InvalidInput::ZeroHeight.into());
        }
        if !(1..=4).contains(&channels) {
            return Err(InvalidInput::UnsupportedChannels(channels).into());
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(channels as usize))
            .ok_or(InvalidInput::BufferLength { expected: None, actual: data.len() })?;
        if expected != data.len() {
            return Err(
                InvalidInput::BufferLength { expected: Some(expected), actual: data.len() }.into()
            );
        }

        Ok(Self { data, width, height, channels })
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

    /// Red, green and blue samples of the pixel at `(x, y)`.
    ///
    /// Buffers with fewer than three channels repeat their first sample; a
    /// fourth (alpha) sample is ignored.
    pub fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let channels = self.channels as usize;
        let start = (y as usize * self.width as usize + x as usize) * channels;
        let pixel = &self.data[start..start + channels];
        if channels >= 3 {
            [pixel[0], pixel[1], pixel[2]]
        } else {
            [pixel[0]; 3]
        }
    }
}
