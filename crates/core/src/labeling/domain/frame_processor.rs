use crate::shared::frame::Frame;

/// Per-frame callback driven by the pipeline host.
///
/// The returned flag tells the host whether to keep the pipeline running;
/// it is not a success indicator. Failures go through `Err`.
pub trait FrameProcessor: Send {
    fn process_frame(&mut self, frame: &mut Frame) -> Result<bool, Box<dyn std::error::Error>>;

    /// Labels written by the most recent `process_frame` call.
    /// Processors that never label keep the default.
    fn last_frame_labels(&self) -> usize {
        0
    }
}
