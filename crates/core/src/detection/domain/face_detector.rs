use crate::detection::domain::detection::Detection;
use crate::shared::frame::Frame;

/// Domain interface for face detection.
///
/// The pipeline treats the detector as a black box returning zero or more
/// detections per frame, in whatever order the detector chooses. Keeping
/// this abstract lets tests substitute synthetic detectors that need no
/// model asset.
pub trait FaceDetector: Send {
    /// Tell the detector the frame dimensions it will receive. Called once,
    /// as soon as the first real frame arrives.
    fn set_input_size(&mut self, width: u32, height: u32);

    /// Run detection on one frame. An empty result is routine, not an error.
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>>;
}
