pub const FACE_MODEL_NAME: &str = "face_detection_yunet_2023mar.onnx";
pub const FACE_MODEL_URL: &str =
    "https://github.com/opencv/opencv_zoo/raw/main/models/face_detection_yunet/face_detection_yunet_2023mar.onnx";

/// Default confidence threshold for keeping a raw detection.
pub const DEFAULT_CONFIDENCE: f64 = 0.6;

/// Default IoU threshold for non-maximum suppression.
pub const DEFAULT_NMS_IOU: f64 = 0.3;

/// Default cap on candidate detections per frame.
pub const DEFAULT_TOP_K: usize = 5000;

pub const DEFAULT_BLUR_KERNEL: i32 = 15;
pub const DEFAULT_PIXEL_BLOCK: i32 = 10;

/// Step applied to the blur kernel by the `[` / `]` commands.
pub const BLUR_KERNEL_STEP: i32 = 20;

/// Step applied to the pixel block by the `[` / `]` commands.
pub const PIXEL_BLOCK_STEP: i32 = 3;

pub const DEFAULT_STREAM_URL: &str = "udp://127.0.0.1:5000?overrun_nonfatal=1";
