use crate::shared::frame::Frame;

/// Presents annotated frames to the operator and exposes the non-blocking
/// key poll the interactive controller consumes.
///
/// Presentation is assumed effectively non-blocking; one frame is handed
/// over per tick. Window handles are thread-bound on most platforms, so
/// unlike the capture side this trait carries no `Send` bound and the sink
/// stays on the thread that created it.
pub trait DisplaySink {
    /// Show one frame. May lazily create the window on first call, once
    /// frame dimensions are known.
    fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Return at most one pending key press. Absence of a key is routine.
    fn poll_key(&mut self) -> Option<char>;

    /// False once the operator has closed the display surface.
    fn is_open(&self) -> bool;

    /// Release the display surface. Idempotent.
    fn close(&mut self);
}
