/// Precompute a normalized 1D Gaussian kernel.
///
/// `kernel_size` must be odd and >= 1. Sigma is derived from the kernel
/// size as `kernel_size / 6.0`, matching OpenCV's sigma=0 convention.
pub fn kernel_1d(kernel_size: usize) -> Vec<f32> {
    debug_assert!(kernel_size >= 1 && kernel_size % 2 == 1);
    let sigma = kernel_size as f64 / 6.0;
    let half = (kernel_size / 2) as f64;
    let mut kernel: Vec<f64> = (0..kernel_size)
        .map(|i| {
            let x = i as f64 - half;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel.iter().map(|&v| v as f32).collect()
}

/// Separable Gaussian blur of an interleaved pixel buffer, in place.
///
/// Edge pixels are clamped. Kernel size 1 (or a degenerate buffer) is a
/// no-op.
pub fn blur(data: &mut [u8], width: usize, height: usize, channels: usize, kernel_size: usize) {
    if kernel_size <= 1 || width == 0 || height == 0 {
        return;
    }
    let kernel = kernel_1d(kernel_size);
    let half = kernel_size / 2;
    let mut temp = vec![0.0f32; width * height * channels];

    // Horizontal pass: data -> temp
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sx = (x as isize + k as isize - half as isize)
                        .clamp(0, (width - 1) as isize) as usize;
                    sum += data[(y * width + sx) * channels + c] as f32 * w;
                }
                temp[(y * width + x) * channels + c] = sum;
            }
        }
    }

    // Vertical pass: temp -> data
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sy = (y as isize + k as isize - half as isize)
                        .clamp(0, (height - 1) as isize) as usize;
                    sum += temp[(sy * width + x) * channels + c] * w;
                }
                data[(y * width + x) * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_sums_to_one() {
        let k = kernel_1d(15);
        let sum: f32 = k.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_kernel_is_symmetric_with_peak_at_center() {
        let k = kernel_1d(7);
        for i in 0..k.len() / 2 {
            assert!((k[i] - k[k.len() - 1 - i]).abs() < 1e-6);
        }
        let center = k[3];
        assert!(k.iter().all(|&v| v <= center));
    }

    #[test]
    fn test_blur_uniform_buffer_unchanged() {
        let mut data = vec![128u8; 10 * 10 * 3];
        blur(&mut data, 10, 10, 3, 5);
        assert!(data.iter().all(|&v| (v as i32 - 128).abs() <= 1));
    }

    #[test]
    fn test_blur_spreads_a_bright_pixel() {
        let mut data = vec![0u8; 10 * 10 * 3];
        let center = (5 * 10 + 5) * 3;
        data[center] = 255;
        data[center + 1] = 255;
        data[center + 2] = 255;

        blur(&mut data, 10, 10, 3, 5);

        assert!(data[center] < 255, "peak should be attenuated");
        let neighbor = (5 * 10 + 6) * 3;
        assert!(data[neighbor] > 0, "energy should spread to neighbors");
    }

    #[test]
    fn test_kernel_size_1_is_identity() {
        let mut data = vec![42u8; 5 * 5 * 3];
        let original = data.clone();
        blur(&mut data, 5, 5, 3, 1);
        assert_eq!(data, original);
    }

    #[test]
    fn test_blur_empty_buffer_is_noop() {
        let mut data: Vec<u8> = Vec::new();
        blur(&mut data, 0, 0, 3, 5);
        assert!(data.is_empty());
    }
}
