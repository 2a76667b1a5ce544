use crate::shared::frame::Frame;

/// Supplies the stream of frames the pipeline consumes.
///
/// Dimensions are fixed for the life of the stream but unknown until the
/// source is opened; `Ok(None)` signals a normal end of stream, never an
/// error.
pub trait FrameSource: Send {
    /// Frame dimensions as reported by the opened stream.
    fn dimensions(&self) -> (u32, u32);

    /// Pull the next frame, blocking until one is available.
    fn next_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>>;

    /// Release the capture handle. Idempotent.
    fn close(&mut self);
}
