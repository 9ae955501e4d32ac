use std::path::PathBuf;

/// What a frame source knows up front about the frames it will yield.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StreamMetadata {
    pub total_frames: usize,
    pub source_path: Option<PathBuf>,
}
