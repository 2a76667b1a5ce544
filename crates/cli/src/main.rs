use std::path::PathBuf;
use std::process;

use clap::Parser;

use streamveil_core::control::controller::{Controller, StdinMaskPrompt};
use streamveil_core::control::runtime_config::RuntimeConfig;
use streamveil_core::detection::domain::face_detector::FaceDetector;
use streamveil_core::detection::infrastructure::model_resolver;
use streamveil_core::detection::infrastructure::onnx_face_detector::OnnxFaceDetector;
use streamveil_core::pipeline::anonymize_stream_use_case::AnonymizeStreamUseCase;
use streamveil_core::shared::constants::{
    DEFAULT_BLUR_KERNEL, DEFAULT_CONFIDENCE, DEFAULT_NMS_IOU, DEFAULT_PIXEL_BLOCK,
    DEFAULT_STREAM_URL, DEFAULT_TOP_K, FACE_MODEL_NAME, FACE_MODEL_URL,
};
use streamveil_core::transform::mode::PrivacyMode;
use streamveil_core::video::infrastructure::ffmpeg_capture::FfmpegCapture;
use streamveil_core::video::infrastructure::minifb_display::MinifbDisplay;

/// Live face anonymization for video streams.
#[derive(Parser)]
#[command(name = "streamveil")]
struct Cli {
    /// Stream URL or video file to anonymize.
    #[arg(default_value = DEFAULT_STREAM_URL)]
    source: String,

    /// Initial privacy mode: blur, pixel, or mask.
    #[arg(long, default_value = "blur")]
    mode: String,

    /// Initial Gaussian blur kernel size.
    #[arg(long, default_value_t = DEFAULT_BLUR_KERNEL)]
    blur_size: i32,

    /// Initial pixelation block size.
    #[arg(long, default_value_t = DEFAULT_PIXEL_BLOCK)]
    pixel_size: i32,

    /// Mask image to composite over faces in mask mode.
    #[arg(long)]
    mask_image: Option<PathBuf>,

    /// Face detection confidence threshold (0.0-1.0).
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE)]
    confidence: f64,

    /// Non-maximum suppression IoU threshold (0.0-1.0).
    #[arg(long, default_value_t = DEFAULT_NMS_IOU)]
    nms: f64,

    /// Maximum detection candidates kept before suppression.
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Use this detection model file instead of the cached/downloaded one.
    #[arg(long)]
    model: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mode = PrivacyMode::parse(&cli.mode)
        .ok_or_else(|| format!("Mode must be 'blur', 'pixel', or 'mask', got '{}'", cli.mode))?;
    let mut config = RuntimeConfig::new(mode, cli.blur_size, cli.pixel_size);
    if let Some(path) = cli.mask_image.clone() {
        config = config.with_mask(path);
    }

    let detector = build_detector(&cli)?;
    let source = FfmpegCapture::open(&cli.source)?;
    let sink = MinifbDisplay::new("StreamVeil");
    let controller = Controller::new(Box::new(StdinMaskPrompt));

    let mut use_case = AnonymizeStreamUseCase::new(
        Box::new(source),
        detector,
        Box::new(sink),
        controller,
        config,
    );
    use_case.execute()
}

fn build_detector(cli: &Cli) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
    let model_path = match &cli.model {
        Some(path) => path.clone(),
        None => {
            log::info!("Resolving model: {FACE_MODEL_NAME}");
            let path = model_resolver::resolve(
                FACE_MODEL_NAME,
                FACE_MODEL_URL,
                None,
                Some(Box::new(download_progress)),
            )?;
            eprintln!();
            path
        }
    };

    Ok(Box::new(OnnxFaceDetector::new(
        &model_path,
        cli.confidence,
        cli.nms,
        cli.top_k,
    )?))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.blur_size < 1 {
        return Err(format!("Blur size must be at least 1, got {}", cli.blur_size).into());
    }
    if cli.pixel_size < 1 {
        return Err(format!("Pixel size must be at least 1, got {}", cli.pixel_size).into());
    }
    if !(0.0..=1.0).contains(&cli.confidence) {
        return Err(format!(
            "Confidence must be between 0.0 and 1.0, got {}",
            cli.confidence
        )
        .into());
    }
    if !(0.0..=1.0).contains(&cli.nms) {
        return Err(format!("NMS threshold must be between 0.0 and 1.0, got {}", cli.nms).into());
    }
    if let Some(path) = &cli.mask_image {
        if !path.exists() {
            return Err(format!("Mask image not found: {}", path.display()).into());
        }
    }
    if let Some(path) = &cli.model {
        if !path.exists() {
            return Err(format!("Model file not found: {}", path.display()).into());
        }
    }
    Ok(())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading face detection model... {pct}%");
    } else {
        eprint!("\rDownloading face detection model... {downloaded} bytes");
    }
}
