//! Converts tile art into packed 1-bit masks: one bit per pixel, set when
//! any channel of the pixel is non-zero, LSB first, no header.

pub mod batch;
pub mod convert;
pub mod error;
pub mod image;
pub mod imgproc;
pub mod preview;
pub mod source;

pub use error::ConvertError;
