use crate::control::runtime_config::RuntimeConfig;
use crate::detection::domain::detection::Detection;
use crate::overlay::draw;
use crate::shared::frame::Frame;
use crate::transform::mode::PrivacyMode;

const BOX_COLOR: [u8; 3] = [0, 255, 0];
const TEXT_COLOR: [u8; 3] = [0, 255, 0];

/// Fixed marker colors per landmark, in landmark order: right eye, left
/// eye, nose tip, right mouth corner, left mouth corner.
const LANDMARK_COLORS: [[u8; 3]; 5] = [
    [0, 0, 255],   // right eye: blue
    [255, 0, 0],   // left eye: red
    [0, 255, 0],   // nose tip: green
    [255, 0, 255], // right mouth corner: magenta
    [255, 255, 0], // left mouth corner: yellow
];

const MODE_LABEL_POS: (i32, i32) = (10, 30);
const PARAM_LABEL_POS: (i32, i32) = (10, 60);
const BANNER_SCALE: i32 = 2;

/// Produces the display copy of a transformed frame.
///
/// Works on a clone so the next tick never sees annotation pixels. Boxes
/// and landmarks are drawn for every detection, valid or not; the overlay
/// is diagnostic, so out-of-bounds geometry is simply clipped.
#[derive(Default)]
pub struct OverlayRenderer;

impl OverlayRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &Frame,
        detections: &[Detection],
        config: &RuntimeConfig,
    ) -> Frame {
        let mut out = frame.clone();

        draw::text(
            &mut out,
            MODE_LABEL_POS.0,
            MODE_LABEL_POS.1,
            &format!("Mode: {}", config.mode.label()),
            TEXT_COLOR,
            BANNER_SCALE,
        );
        if let Some(param) = param_label(config) {
            draw::text(
                &mut out,
                PARAM_LABEL_POS.0,
                PARAM_LABEL_POS.1,
                &param,
                TEXT_COLOR,
                BANNER_SCALE,
            );
        }

        for det in detections {
            draw::rect_outline(&mut out, det.region, BOX_COLOR, 2);
            draw::text(
                &mut out,
                det.region.x,
                det.region.y + 12,
                &format!("{:.4}", det.confidence),
                TEXT_COLOR,
                1,
            );
            for (k, &(lx, ly)) in det.landmarks.iter().enumerate() {
                draw::filled_circle(
                    &mut out,
                    lx.round() as i32,
                    ly.round() as i32,
                    2,
                    LANDMARK_COLORS[k],
                );
            }
        }

        out
    }
}

fn param_label(config: &RuntimeConfig) -> Option<String> {
    match config.mode {
        PrivacyMode::Blur => Some(format!("Blur Size: {}", config.blur_kernel)),
        PrivacyMode::Pixelate => Some(format!("Pixel Size: {}", config.pixel_block)),
        PrivacyMode::Mask => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::region::Region;

    fn pixel(frame: &Frame, x: u32, y: u32) -> [u8; 3] {
        let idx = frame.pixel_offset(x, y);
        [frame.data()[idx], frame.data()[idx + 1], frame.data()[idx + 2]]
    }

    fn detection(x: i32, y: i32, w: i32, h: i32) -> Detection {
        Detection {
            region: Region::new(x, y, w, h),
            landmarks: [
                (30.0, 100.0),
                (50.0, 100.0),
                (40.0, 110.0),
                (32.0, 120.0),
                (48.0, 120.0),
            ],
            confidence: 0.8765,
        }
    }

    #[test]
    fn test_render_does_not_mutate_input() {
        let frame = Frame::filled(200, 200, 3, 50);
        let original = frame.clone();
        let renderer = OverlayRenderer::new();
        let _ = renderer.render(&frame, &[detection(20, 90, 40, 40)], &RuntimeConfig::default());
        assert_eq!(frame, original);
    }

    #[test]
    fn test_render_draws_banner() {
        let frame = Frame::filled(200, 200, 3, 0);
        let out = OverlayRenderer::new().render(&frame, &[], &RuntimeConfig::default());
        // Banner area contains green text pixels; input was black.
        let banner_changed = (0..200u32)
            .flat_map(|x| (25..45u32).map(move |y| (x, y)))
            .any(|(x, y)| pixel(&out, x, y) == [0, 255, 0]);
        assert!(banner_changed);
    }

    #[test]
    fn test_render_draws_bounding_box() {
        let frame = Frame::filled(200, 200, 3, 0);
        let out = OverlayRenderer::new().render(
            &frame,
            &[detection(20, 90, 40, 40)],
            &RuntimeConfig::default(),
        );
        assert_eq!(pixel(&out, 20, 90), BOX_COLOR);
        assert_eq!(pixel(&out, 59, 129), BOX_COLOR);
    }

    #[test]
    fn test_render_draws_landmarks_in_fixed_colors() {
        let frame = Frame::filled(200, 200, 3, 0);
        let out = OverlayRenderer::new().render(
            &frame,
            &[detection(20, 90, 40, 40)],
            &RuntimeConfig::default(),
        );
        assert_eq!(pixel(&out, 30, 100), LANDMARK_COLORS[0]);
        assert_eq!(pixel(&out, 50, 100), LANDMARK_COLORS[1]);
        assert_eq!(pixel(&out, 40, 110), LANDMARK_COLORS[2]);
        assert_eq!(pixel(&out, 32, 120), LANDMARK_COLORS[3]);
        assert_eq!(pixel(&out, 48, 120), LANDMARK_COLORS[4]);
    }

    #[test]
    fn test_render_draws_invalid_detection_clipped() {
        // Diagnostic overlay draws boxes even for out-of-bounds regions.
        let frame = Frame::filled(100, 100, 3, 0);
        let out = OverlayRenderer::new().render(
            &frame,
            &[Detection::from_region(Region::new(-10, -10, 30, 30), 0.5)],
            &RuntimeConfig::default(),
        );
        assert_eq!(pixel(&out, 19, 0), BOX_COLOR);
        assert_eq!(pixel(&out, 0, 19), BOX_COLOR);
    }

    #[test]
    fn test_param_label_per_mode() {
        let mut cfg = RuntimeConfig::default();
        assert_eq!(param_label(&cfg), Some("Blur Size: 15".to_string()));
        cfg.mode = PrivacyMode::Pixelate;
        assert_eq!(param_label(&cfg), Some("Pixel Size: 10".to_string()));
        cfg.mode = PrivacyMode::Mask;
        assert_eq!(param_label(&cfg), None);
    }
}
