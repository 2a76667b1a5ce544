use super::resize;

/// Pixelate an ROI in place: downscale by `block` with bilinear
/// interpolation, then upscale back with nearest-neighbor, producing the
/// visible blocking.
///
/// The factor is clamped to >= 1; a factor larger than the ROI's smaller
/// dimension falls back to 1 (an identity pass) rather than collapsing the
/// ROI to nothing.
pub fn pixelate(data: &mut [u8], width: usize, height: usize, channels: usize, block: i32) {
    if width == 0 || height == 0 {
        return;
    }
    let mut factor = block.max(1) as usize;
    if factor > width.min(height) {
        factor = 1;
    }

    let small_w = width / factor;
    let small_h = height / factor;

    let small = resize::bilinear(data, width, height, channels, small_w, small_h);
    let restored = resize::nearest(&small, small_w, small_h, channels, width, height);
    data.copy_from_slice(&restored);
}
