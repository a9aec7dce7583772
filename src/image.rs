/// Channel layout of a decoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelFormat {
    channels: u8,
    bytes_per_channel: u8,
}

impl PixelFormat {
    pub const GRAY8: PixelFormat = PixelFormat::new(1, 1);
    pub const RGB8: PixelFormat = PixelFormat::new(3, 1);
    pub const RGBA8: PixelFormat = PixelFormat::new(4, 1);

    pub const fn new(channels: u8, bytes_per_channel: u8) -> Self {
        assert!(channels > 0 && bytes_per_channel > 0);
        PixelFormat {
            channels,
            bytes_per_channel,
        }
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn bytes_per_channel(&self) -> u8 {
        self.bytes_per_channel
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.channels() as usize * self.bytes_per_channel() as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageHeader {
    format: PixelFormat,
    width: u32,
    height: u32,
}

impl ImageHeader {
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Self {
        ImageHeader {
            format,
            width,
            height,
        }
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub fn data_len(&self) -> usize {
        self.pixel_count() * self.format().bytes_per_pixel()
    }
}

/// Pixels of one image, tightly packed in the decoder's scan order
/// (row-major, top-left origin). Zero-sized images are allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    header: ImageHeader,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// All-zero image.
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Self {
        let header = ImageHeader::new(format, width, height);
        PixelBuffer {
            data: vec![0; header.data_len()],
            header,
        }
    }

    pub fn from_raw(format: PixelFormat, width: u32, height: u32, data: Vec<u8>) -> Self {
        let header = ImageHeader::new(format, width, height);
        assert_eq!(
            data.len(),
            header.data_len(),
            "invalid data len for {}x{} image with format {:?}",
            width,
            height,
            format
        );
        PixelBuffer { header, data }
    }

    pub fn header(&self) -> ImageHeader {
        self.header
    }

    pub fn width(&self) -> u32 {
        self.header().width()
    }

    pub fn height(&self) -> u32 {
        self.header().height()
    }

    pub fn format(&self) -> PixelFormat {
        self.header().format()
    }

    pub fn pixel_count(&self) -> usize {
        self.header().pixel_count()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// One byte slice per pixel, covering all of its channels.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.format().bytes_per_pixel())
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        assert!(x < self.width() && y < self.height(), "pixel ({}, {}) out of bounds", x, y);
        let bpp = self.format().bytes_per_pixel();
        let offset = (y as usize * self.width() as usize + x as usize) * bpp;
        &mut self.data[offset..offset + bpp]
    }
}

pub mod convert;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_layout() {
        let mut buf = PixelBuffer::new(PixelFormat::RGBA8, 3, 2);
        assert_eq!(buf.data().len(), 24);
        assert_eq!(buf.pixel_count(), 6);

        buf.pixel_mut(1, 1).copy_from_slice(&[1, 2, 3, 4]);
        let pixels: Vec<&[u8]> = buf.pixels().collect();
        assert_eq!(pixels.len(), 6);
        assert_eq!(pixels[4], &[1, 2, 3, 4]);
        assert!(pixels.iter().enumerate().all(|(i, p)| i == 4 || p.iter().all(|c| *c == 0)));
    }

    #[test]
    fn test_header() {
        let buf = PixelBuffer::new(PixelFormat::new(2, 2), 7, 3);
        let header = buf.header();
        assert_eq!((header.width(), header.height()), (7, 3));
        assert_eq!(header.format().channels(), 2);
        assert_eq!(header.format().bytes_per_channel(), 2);
        assert_eq!(header.format().bytes_per_pixel(), 4);
        assert_eq!(header.pixel_count(), 21);
        assert_eq!(header.data_len(), 84);
        assert_eq!(buf.data().len(), header.data_len());
    }

    #[test]
    fn test_empty() {
        let buf = PixelBuffer::new(PixelFormat::GRAY8, 0, 0);
        assert_eq!(buf.pixel_count(), 0);
        assert_eq!(buf.pixels().count(), 0);

        let buf = PixelBuffer::from_raw(PixelFormat::new(2, 2), 5, 0, Vec::new());
        assert_eq!(buf.pixels().count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_bad_data_len() {
        PixelBuffer::from_raw(PixelFormat::RGB8, 2, 2, vec![0; 11]);
    }
}
