use crate::image::PixelBuffer;

/// A pixel is lit when any of its channels is non-zero. Works for any
/// channel count and depth.
pub fn is_lit<I>(channels: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq + Default,
{
    let zero: I::Item = Default::default();
    channels.into_iter().any(|c| c != zero)
}

/// One flag per pixel, in scan order.
///
/// Channels are compared byte-wise: a wide channel is non-zero exactly when
/// one of its bytes is.
pub fn build_mask(image: &PixelBuffer) -> Vec<bool> {
    image.pixels().map(|p| is_lit(p.iter().copied())).collect()
}
