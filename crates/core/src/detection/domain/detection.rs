use crate::shared::region::Region;

pub const NUM_LANDMARKS: usize = 5;

/// One normalized detector output: bounding region, the five facial
/// landmarks (right eye, left eye, nose tip, right mouth corner, left
/// mouth corner) and a confidence score in `0..=1`.
///
/// Detections are produced fresh each tick and discarded afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    pub region: Region,
    pub landmarks: [(f64, f64); NUM_LANDMARKS],
    pub confidence: f64,
}

impl Detection {
    pub fn new(
        region: Region,
        landmarks: [(f64, f64); NUM_LANDMARKS],
        confidence: f64,
    ) -> Self {
        Self {
            region,
            landmarks,
            confidence,
        }
    }

    /// A detection with no landmark information, used by tests and
    /// synthetic detectors.
    pub fn from_region(region: Region, confidence: f64) -> Self {
        Self {
            region,
            landmarks: [(0.0, 0.0); NUM_LANDMARKS],
            confidence,
        }
    }
}
