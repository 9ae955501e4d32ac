use crate::shared::frame::Frame;

/// Sink for labeled frames.
pub trait FrameWriter: Send {
    fn write(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Flushes buffered output. Further writes are an error.
    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}
