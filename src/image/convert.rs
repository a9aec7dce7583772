use ::image::{DynamicImage, GenericImageView};

use super::*;

/// Keeps whatever channel layout the decoder produced: gray stays one
/// channel, 16-bit stays two bytes per channel.
pub fn from_dynamic(img: DynamicImage) -> PixelBuffer {
    let color = img.color();
    let channels = color.channel_count();
    let format = PixelFormat::new(channels, color.bytes_per_pixel() / channels);
    let (width, height) = img.dimensions();
    PixelBuffer::from_raw(format, width, height, img.into_bytes())
}
