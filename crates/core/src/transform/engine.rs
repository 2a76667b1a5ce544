use crate::control::runtime_config::RuntimeConfig;
use crate::detection::domain::detection::Detection;
use crate::shared::frame::Frame;
use crate::transform::infrastructure::roi::{self, RoiRect};
use crate::transform::infrastructure::{gaussian, mask_overlay, pixelate};
use crate::transform::mode::PrivacyMode;

/// Pure ROI transform: mutates an extracted region buffer according to the
/// current configuration.
type RoiTransform = fn(&mut [u8], usize, usize, usize, &RuntimeConfig);

/// Applies the active privacy transform to every valid detection region,
/// mutating the frame in place.
///
/// Regions are processed in detector emission order; where regions overlap,
/// the later transform overwrites the earlier one in the overlap. That
/// ordering is whatever the detector produced and carries no further
/// guarantee.
#[derive(Default)]
pub struct TransformEngine;

impl TransformEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, frame: &mut Frame, detections: &[Detection], config: &RuntimeConfig) {
        let frame_w = frame.width();
        let frame_h = frame.height();
        let width = frame_w as usize;
        let channels = frame.channels() as usize;
        let transform = roi_transform(config.mode);
        let data = frame.data_mut();

        let mut roi_buf = Vec::new();
        for det in detections {
            let r = det.region;
            // Out-of-bounds regions are routine detector imprecision; skip
            // them without touching any pixels.
            if !r.fits_within(frame_w, frame_h) {
                log::debug!(
                    "Skipping out-of-bounds region ({}, {}, {}, {})",
                    r.x,
                    r.y,
                    r.width,
                    r.height
                );
                continue;
            }

            let rect = RoiRect {
                x: r.x as usize,
                y: r.y as usize,
                w: r.width as usize,
                h: r.height as usize,
            };
            roi::extract(data, width, channels, rect, &mut roi_buf);
            transform(&mut roi_buf, rect.w, rect.h, channels, config);
            roi::write_back(data, &roi_buf, width, channels, rect);
        }
    }
}

fn roi_transform(mode: PrivacyMode) -> RoiTransform {
    match mode {
        PrivacyMode::Blur => blur_roi,
        PrivacyMode::Pixelate => pixelate_roi,
        PrivacyMode::Mask => mask_roi,
    }
}

fn blur_roi(roi: &mut [u8], w: usize, h: usize, channels: usize, config: &RuntimeConfig) {
    // Clamp to >= 1 and force odd, as the separable kernel requires.
    let kernel = (config.blur_kernel.max(1) as usize) | 1;
    gaussian::blur(roi, w, h, channels, kernel);
}

fn pixelate_roi(roi: &mut [u8], w: usize, h: usize, channels: usize, config: &RuntimeConfig) {
    pixelate::pixelate(roi, w, h, channels, config.pixel_block);
}

fn mask_roi(roi: &mut [u8], w: usize, h: usize, channels: usize, config: &RuntimeConfig) {
    mask_overlay::composite(roi, w, h, channels, &config.mask);
}
