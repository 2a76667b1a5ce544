/// Resize an interleaved pixel buffer with bilinear interpolation.
///
/// Same-size output is an exact identity: the source coordinate mapping
/// degenerates to integer positions with zero fractional weight.
pub fn bilinear(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    target_w: usize,
    target_h: usize,
) -> Vec<u8> {
    if width == 0 || height == 0 || target_w == 0 || target_h == 0 {
        return Vec::new();
    }
    let mut out = vec![0u8; target_w * target_h * channels];

    for y in 0..target_h {
        for x in 0..target_w {
            let src_x = x as f32 * (width as f32 - 1.0) / (target_w as f32 - 1.0).max(1.0);
            let src_y = y as f32 * (height as f32 - 1.0) / (target_h as f32 - 1.0).max(1.0);

            let x0 = (src_x.floor() as usize).min(width - 1);
            let x1 = (x0 + 1).min(width - 1);
            let y0 = (src_y.floor() as usize).min(height - 1);
            let y1 = (y0 + 1).min(height - 1);

            let fx = src_x - x0 as f32;
            let fy = src_y - y0 as f32;

            for c in 0..channels {
                let v00 = data[(y0 * width + x0) * channels + c] as f32;
                let v10 = data[(y0 * width + x1) * channels + c] as f32;
                let v01 = data[(y1 * width + x0) * channels + c] as f32;
                let v11 = data[(y1 * width + x1) * channels + c] as f32;

                let val = v00 * (1.0 - fx) * (1.0 - fy)
                    + v10 * fx * (1.0 - fy)
                    + v01 * (1.0 - fx) * fy
                    + v11 * fx * fy;
                out[(y * target_w + x) * channels + c] = val.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    out
}

/// Resize an interleaved pixel buffer with nearest-neighbor sampling.
pub fn nearest(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    target_w: usize,
    target_h: usize,
) -> Vec<u8> {
    if width == 0 || height == 0 || target_w == 0 || target_h == 0 {
        return Vec::new();
    }
    let mut out = vec![0u8; target_w * target_h * channels];

    for y in 0..target_h {
        let src_y = (y * height / target_h).min(height - 1);
        for x in 0..target_w {
            let src_x = (x * width / target_w).min(width - 1);
            let src = (src_y * width + src_x) * channels;
            let dst = (y * target_w + x) * channels;
            out[dst..dst + channels].copy_from_slice(&data[src..src + channels]);
        }
    }

    out
}
