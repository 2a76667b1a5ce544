use crate::control::controller::{ControlOutcome, Controller};
use crate::control::runtime_config::RuntimeConfig;
use crate::detection::domain::face_detector::FaceDetector;
use crate::overlay::renderer::OverlayRenderer;
use crate::transform::engine::TransformEngine;
use crate::video::domain::display_sink::DisplaySink;
use crate::video::domain::frame_source::FrameSource;

/// Orchestrates the live anonymization loop.
///
/// Wires domain components together and ticks them once per frame:
/// acquire, handle pending keys, detect, transform, annotate, present.
/// Only startup can fail fatally; once the loop is running, a detector
/// error on a single frame degrades to "no detections" for that tick and
/// end of stream ends the run cleanly. The source and sink are closed on
/// every exit path.
pub struct AnonymizeStreamUseCase {
    source: Box<dyn FrameSource>,
    detector: Box<dyn FaceDetector>,
    engine: TransformEngine,
    renderer: OverlayRenderer,
    sink: Box<dyn DisplaySink>,
    controller: Controller,
    config: RuntimeConfig,
}

impl AnonymizeStreamUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        detector: Box<dyn FaceDetector>,
        sink: Box<dyn DisplaySink>,
        controller: Controller,
        config: RuntimeConfig,
    ) -> Self {
        Self {
            source,
            detector,
            engine: TransformEngine::new(),
            renderer: OverlayRenderer::new(),
            sink,
            controller,
            config,
        }
    }

    pub fn execute(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let result = self.run_loop();
        self.source.close();
        self.sink.close();
        result
    }

    fn run_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let (width, height) = self.source.dimensions();
        self.detector.set_input_size(width, height);

        loop {
            if !self.sink.is_open() {
                log::info!("display closed, stopping");
                break;
            }

            let mut frame = match self.source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    log::info!("end of stream");
                    break;
                }
                Err(e) => {
                    log::warn!("frame acquisition failed, stopping: {e}");
                    break;
                }
            };

            if let Some(key) = self.sink.poll_key() {
                if self.controller.handle(key, &mut self.config) == ControlOutcome::Quit {
                    break;
                }
            }

            let detections = match self.detector.detect(&frame) {
                Ok(detections) => detections,
                Err(e) => {
                    log::warn!("detection failed on frame {}: {e}", frame.tick());
                    Vec::new()
                }
            };

            self.engine.apply(&mut frame, &detections, &self.config);
            let annotated = self.renderer.render(&frame, &detections, &self.config);
            self.sink.present(&annotated)?;
        }

        Ok(())
    }
}
