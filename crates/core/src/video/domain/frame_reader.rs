use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::stream_metadata::StreamMetadata;

/// Reads recorded inference frames from a source.
///
/// Implementations own the on-disk format; the pipeline only sees
/// `Frame` and `StreamMetadata`.
pub trait FrameReader: Send {
    /// Opens the source and returns what is known about it.
    fn open(&mut self, path: &Path) -> Result<StreamMetadata, Box<dyn std::error::Error>>;

    /// Returns an iterator over frames in source order.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases any resources held by the reader.
    fn close(&mut self);
}
