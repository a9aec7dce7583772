use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::image::{convert, PixelBuffer};

// Decodes one image file into its pixels.
// Implementations must report bad input as ConvertError::Decode.
pub trait Source {
    fn decode(&mut self, path: &Path) -> Result<PixelBuffer>;
}

/// Decodes through the `image` crate. The format is sniffed from the file
/// content and falls back to the extension, which matters for TGA since it
/// has no magic number.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSource;

impl Source for FileSource {
    fn decode(&mut self, path: &Path) -> Result<PixelBuffer> {
        let decode_err = |source: ::image::ImageError| ConvertError::Decode {
            path: path.to_path_buf(),
            source,
        };
        let img = ::image::io::Reader::open(path)
            .map_err(|e| decode_err(e.into()))?
            .with_guessed_format()
            .map_err(|e| decode_err(e.into()))?
            .decode()
            .map_err(decode_err)?;
        Ok(convert::from_dynamic(img))
    }
}
