use crate::masking::mask_asset::MaskAsset;

use super::resize;

/// Composite the mask asset over an ROI in place.
///
/// The asset is stretched (non-aspect-preserving) to the ROI's exact size,
/// then blended per pixel with its alpha channel as the weight. An unset
/// asset leaves the ROI untouched.
pub fn composite(data: &mut [u8], width: usize, height: usize, channels: usize, asset: &MaskAsset) {
    let MaskAsset::Loaded {
        data: mask,
        width: mask_w,
        height: mask_h,
    } = asset
    else {
        return;
    };

    let resized = resize::bilinear(
        mask,
        *mask_w as usize,
        *mask_h as usize,
        4,
        width,
        height,
    );
    if resized.is_empty() {
        return;
    }

    let color_channels = channels.min(3);
    for px in 0..width * height {
        let alpha = resized[px * 4 + 3] as u32;
        for c in 0..color_channels {
            let overlay = resized[px * 4 + c] as u32;
            let base = data[px * channels + c] as u32;
            // Rounded integer alpha blend: out = overlay*a + base*(1-a)
            data[px * channels + c] =
                ((overlay * alpha + base * (255 - alpha) + 127) / 255) as u8;
        }
    }
}
