use std::path::Path;

use anyhow::{ensure, Context};
use ::image::{GrayImage, Luma};

use crate::imgproc::{packed_len, unpack_bits};

/// Renders a packed mask as a grayscale image, lit pixels white.
/// The mask carries no dimensions, so the caller supplies them.
pub fn render_mask(packed: &[u8], width: u32, height: u32) -> anyhow::Result<GrayImage> {
    let pixel_count = width as usize * height as usize;
    ensure!(
        packed.len() == packed_len(pixel_count),
        "mask has {} bytes, a {}x{} tile needs {}",
        packed.len(),
        width,
        height,
        packed_len(pixel_count)
    );

    let bits = unpack_bits(packed, pixel_count);
    Ok(GrayImage::from_fn(width, height, |x, y| {
        let lit = bits[y as usize * width as usize + x as usize];
        Luma([if lit { 0xff } else { 0 }])
    }))
}

pub fn render_mask_file(mask: &Path, width: u32, height: u32, output: &Path) -> anyhow::Result<()> {
    let packed = std::fs::read(mask).with_context(|| format!("Cannot read {}", mask.display()))?;
    let img = render_mask(&packed, width, height)
        .with_context(|| format!("Invalid mask {}", mask.display()))?;
    img.save(output)
        .with_context(|| format!("Cannot save preview to {}", output.display()))?;
    Ok(())
}
