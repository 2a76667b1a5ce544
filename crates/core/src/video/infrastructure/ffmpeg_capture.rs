use crate::shared::frame::Frame;
use crate::video::domain::frame_source::FrameSource;

/// Errors raised while opening a capture source.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("ffmpeg initialization failed: {0}")]
    Init(ffmpeg_next::Error),
    #[error("failed to open stream {url:?}: {source}")]
    Open {
        url: String,
        source: ffmpeg_next::Error,
    },
    #[error("no video stream found in {0:?}")]
    NoVideoStream(String),
    #[error("decoder setup failed: {0}")]
    Decoder(ffmpeg_next::Error),
}

/// Decodes video frames via ffmpeg-next (libavformat + libavcodec).
///
/// Accepts anything libavformat can open: file paths, UDP/RTSP URLs,
/// pipes. Each decoded frame is converted to tightly-packed RGB24 and
/// wrapped in a [`Frame`]. Frames are pulled one at a time, so a live
/// stream never has to be buffered.
pub struct FfmpegCapture {
    ictx: Option<ffmpeg_next::format::context::Input>,
    decoder: Option<ffmpeg_next::decoder::Video>,
    scaler: Option<ffmpeg_next::software::scaling::Context>,
    video_stream_index: usize,
    width: u32,
    height: u32,
    tick: usize,
    flushing: bool,
}

// Safety: FfmpegCapture is only used from a single thread at a time.
// The raw pointers inside ffmpeg types are not shared across threads.
unsafe impl Send for FfmpegCapture {}

impl FfmpegCapture {
    /// Opens the given source and prepares the decode chain.
    pub fn open(url: &str) -> Result<Self, CaptureError> {
        ffmpeg_next::init().map_err(CaptureError::Init)?;

        let ictx = ffmpeg_next::format::input(&url).map_err(|e| CaptureError::Open {
            url: url.to_string(),
            source: e,
        })?;

        let stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| CaptureError::NoVideoStream(url.to_string()))?;
        let video_stream_index = stream.index();

        let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
            .map_err(CaptureError::Decoder)?;
        let decoder = codec_ctx.decoder().video().map_err(CaptureError::Decoder)?;

        let width = decoder.width();
        let height = decoder.height();

        let scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGB24,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(CaptureError::Decoder)?;

        log::info!("opened capture source {url} ({width}x{height})");

        Ok(Self {
            ictx: Some(ictx),
            decoder: Some(decoder),
            scaler: Some(scaler),
            video_stream_index,
            width,
            height,
            tick: 0,
            flushing: false,
        })
    }

    fn try_receive(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        let decoder = self.decoder.as_mut().ok_or("capture closed")?;
        let scaler = self.scaler.as_mut().ok_or("capture closed")?;

        let mut decoded = ffmpeg_next::util::frame::video::Video::empty();
        if decoder.receive_frame(&mut decoded).is_err() {
            return Ok(None);
        }

        let mut rgb_frame = ffmpeg_next::util::frame::video::Video::empty();
        scaler.run(&decoded, &mut rgb_frame)?;

        let pixels = extract_rgb_pixels(&rgb_frame, self.width, self.height);
        let frame = Frame::new(pixels, self.width, self.height, 3, self.tick);
        self.tick += 1;
        Ok(Some(frame))
    }
}

impl FrameSource for FfmpegCapture {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn next_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        if self.ictx.is_none() {
            return Ok(None);
        }

        if let Some(frame) = self.try_receive()? {
            return Ok(Some(frame));
        }

        if self.flushing {
            return Ok(None);
        }

        loop {
            let ictx = self.ictx.as_mut().ok_or("capture closed")?;
            let Some((stream, packet)) = ictx.packets().next() else {
                // Demuxer exhausted; drain frames still buffered in the decoder.
                let decoder = self.decoder.as_mut().ok_or("capture closed")?;
                let _ = decoder.send_eof();
                self.flushing = true;
                return self.try_receive();
            };

            if stream.index() != self.video_stream_index {
                continue;
            }

            let decoder = self.decoder.as_mut().ok_or("capture closed")?;
            if decoder.send_packet(&packet).is_err() {
                continue;
            }

            if let Some(frame) = self.try_receive()? {
                return Ok(Some(frame));
            }
        }
    }

    fn close(&mut self) {
        self.scaler = None;
        self.decoder = None;
        self.ictx = None;
    }
}

/// Copies pixel data from an ffmpeg frame into a contiguous RGB buffer.
///
/// ffmpeg frames may have padding bytes at the end of each row
/// (stride > width*3); strip it to produce a tightly-packed buffer.
fn extract_rgb_pixels(
    rgb_frame: &ffmpeg_next::util::frame::video::Video,
    width: u32,
    height: u32,
) -> Vec<u8> {
    let stride = rgb_frame.stride(0);
    let data = rgb_frame.data(0);
    let w = width as usize;
    let h = height as usize;

    let mut pixels = Vec::with_capacity(w * h * 3);
    for row in 0..h {
        let row_start = row * stride;
        pixels.extend_from_slice(&data[row_start..row_start + w * 3]);
    }
    pixels
}
