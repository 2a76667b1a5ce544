/// Rectangle of a region-of-interest within frame data, in validated
/// (in-bounds, non-negative) coordinates.
#[derive(Clone, Copy, Debug)]
pub struct RoiRect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

/// Copy an ROI out of frame data into a reusable buffer.
pub fn extract(data: &[u8], frame_width: usize, channels: usize, rect: RoiRect, roi: &mut Vec<u8>) {
    roi.resize(rect.w * rect.h * channels, 0);
    for row in 0..rect.h {
        let src = ((rect.y + row) * frame_width + rect.x) * channels;
        let dst = row * rect.w * channels;
        roi[dst..dst + rect.w * channels].copy_from_slice(&data[src..src + rect.w * channels]);
    }
}

/// Write a transformed ROI buffer back into frame data.
pub fn write_back(data: &mut [u8], roi: &[u8], frame_width: usize, channels: usize, rect: RoiRect) {
    for row in 0..rect.h {
        let dst = ((rect.y + row) * frame_width + rect.x) * channels;
        let src = row * rect.w * channels;
        data[dst..dst + rect.w * channels].copy_from_slice(&roi[src..src + rect.w * channels]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_then_write_back_is_identity() {
        let data: Vec<u8> = (0u8..=255).cycle().take(10 * 10 * 3).collect();
        let mut copy = data.clone();
        let rect = RoiRect {
            x: 2,
            y: 3,
            w: 4,
            h: 5,
        };
        let mut roi = Vec::new();
        extract(&data, 10, 3, rect, &mut roi);
        assert_eq!(roi.len(), 4 * 5 * 3);
        write_back(&mut copy, &roi, 10, 3, rect);
        assert_eq!(copy, data);
    }

    #[test]
    fn test_write_back_touches_only_rect() {
        let mut data = vec![0u8; 8 * 8 * 3];
        let rect = RoiRect {
            x: 1,
            y: 1,
            w: 2,
            h: 2,
        };
        let roi = vec![255u8; 2 * 2 * 3];
        write_back(&mut data, &roi, 8, 3, rect);

        // Corners of the rect are set, pixels outside stay zero.
        assert_eq!(data[(1 * 8 + 1) * 3], 255);
        assert_eq!(data[(2 * 8 + 2) * 3], 255);
        assert_eq!(data[0], 0);
        assert_eq!(data[(3 * 8 + 3) * 3], 0);
    }
}
