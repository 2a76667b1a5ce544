/// Face detector backed by an ONNX Runtime session.
///
/// Expects a YuNet-style detection head: one output tensor of rows
/// `[x, y, w, h, lx0, ly0, ..., lx4, ly4, conf]` in input pixel
/// coordinates, confidence at index 14. The adapter normalizes that raw
/// tabular output into [`Detection`]s: confidence filter, candidate cap,
/// then greedy NMS.
use std::path::Path;

use crate::detection::domain::detection::{Detection, NUM_LANDMARKS};
use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Values per output row: 4 box coords + 5 landmark pairs + confidence.
pub const ROW_LEN: usize = 15;

pub struct OnnxFaceDetector {
    session: ort::session::Session,
    confidence: f64,
    nms_iou: f64,
    top_k: usize,
    input_size: Option<(u32, u32)>,
}

impl OnnxFaceDetector {
    /// Load the detection model. Failure here is fatal for the pipeline:
    /// without a detector there is nothing to anonymize.
    pub fn new(
        model_path: &Path,
        confidence: f64,
        nms_iou: f64,
        top_k: usize,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let session = ort::session::Session::builder()?.commit_from_file(model_path)?;
        log::info!("Loaded face detection model from {}", model_path.display());

        Ok(Self {
            session,
            confidence,
            nms_iou,
            top_k,
            input_size: None,
        })
    }
}

impl FaceDetector for OnnxFaceDetector {
    fn set_input_size(&mut self, width: u32, height: u32) {
        log::debug!("Detector input size set to {width}x{height}");
        self.input_size = Some((width, height));
    }

    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
        let (in_w, in_h) = self
            .input_size
            .unwrap_or((frame.width(), frame.height()));

        let tensor = preprocess(frame, in_w, in_h);
        let input = ort::value::Tensor::from_array(tensor)?;
        let outputs = self.session.run(ort::inputs![input])?;
        if outputs.len() == 0 {
            return Err("face detection model produced no outputs".into());
        }

        let array = outputs[0].try_extract_array::<f32>()?;
        let shape = array.shape();

        // Accept [N, 15] or [1, N, 15].
        let rows = match shape {
            [_, ROW_LEN] => shape[0],
            [1, _, ROW_LEN] => shape[1],
            _ => return Err(format!("unexpected detector output shape: {shape:?}").into()),
        };
        let data = array
            .as_slice()
            .ok_or("detector output is not contiguous")?;

        // Map detections back to frame coordinates if the model ran at a
        // different resolution than the frame.
        let sx = frame.width() as f64 / in_w as f64;
        let sy = frame.height() as f64 / in_h as f64;

        let mut detections = decode_rows(data, rows, self.confidence, sx, sy);
        detections.truncate(self.top_k);
        Ok(nms(detections, self.nms_iou))
    }
}

/// Convert a frame to an NCHW float tensor at the detector's input size,
/// keeping the 0..=255 value range the model expects.
fn preprocess(frame: &Frame, in_w: u32, in_h: u32) -> ndarray::Array4<f32> {
    let src = frame.as_ndarray();
    let (fw, fh) = (frame.width() as usize, frame.height() as usize);
    let (tw, th) = (in_w as usize, in_h as usize);

    let mut tensor = ndarray::Array4::<f32>::zeros((1, 3, th, tw));
    for y in 0..th {
        let src_y = (y * fh / th).min(fh - 1);
        for x in 0..tw {
            let src_x = (x * fw / tw).min(fw - 1);
            for c in 0..3 {
                tensor[[0, c, y, x]] = src[[src_y, src_x, c]] as f32;
            }
        }
    }
    tensor
}

/// Decode raw tabular rows into detections, dropping rows below the
/// confidence threshold and sorting the rest by confidence descending.
fn decode_rows(data: &[f32], rows: usize, confidence: f64, sx: f64, sy: f64) -> Vec<Detection> {
    let mut detections = Vec::new();
    for i in 0..rows {
        let row = &data[i * ROW_LEN..(i + 1) * ROW_LEN];
        let conf = row[14] as f64;
        if conf < confidence {
            continue;
        }

        let region = Region::new(
            (row[0] as f64 * sx).round() as i32,
            (row[1] as f64 * sy).round() as i32,
            (row[2] as f64 * sx).round() as i32,
            (row[3] as f64 * sy).round() as i32,
        );

        let mut landmarks = [(0.0, 0.0); NUM_LANDMARKS];
        for (k, point) in landmarks.iter_mut().enumerate() {
            *point = (row[4 + 2 * k] as f64 * sx, row[5 + 2 * k] as f64 * sy);
        }

        detections.push(Detection::new(region, landmarks, conf));
    }

    detections.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    detections
}

/// Greedy NMS over confidence-sorted detections.
fn nms(detections: Vec<Detection>, iou_thresh: f64) -> Vec<Detection> {
    let mut kept: Vec<Detection> = Vec::with_capacity(detections.len());
    for det in detections {
        let dominated = kept.iter().any(|k| k.region.iou(&det.region) > iou_thresh);
        if !dominated {
            kept.push(det);
        }
    }
    kept
}
