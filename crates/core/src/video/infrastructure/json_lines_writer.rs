use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::shared::frame::Frame;
use crate::video::domain::frame_io_error::FrameIoError;
use crate::video::domain::frame_writer::FrameWriter;

/// Writes frames as JSON Lines to a file or any byte sink.
pub struct JsonLinesWriter {
    out: Option<Box<dyn Write + Send>>,
}

impl JsonLinesWriter {
    /// Creates (or truncates) `path`, making parent directories as needed.
    pub fn create(path: &Path) -> Result<Self, FrameIoError> {
        let create_err = |source: io::Error| FrameIoError::Create {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(create_err)?;
        }
        let file = File::create(path).map_err(create_err)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    pub fn stdout() -> Self {
        Self::from_writer(BufWriter::new(io::stdout()))
    }

    pub fn from_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Some(Box::new(out)),
        }
    }
}

impl FrameWriter for JsonLinesWriter {
    fn write(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let out = self.out.as_mut().ok_or(FrameIoError::Closed)?;
        serde_json::to_writer(&mut *out, frame).map_err(|source| FrameIoError::Encode {
            index: frame.index(),
            source,
        })?;
        out.write_all(b"\n").map_err(FrameIoError::Write)?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(mut out) = self.out.take() {
            out.flush().map_err(FrameIoError::Write)?;
        }
        Ok(())
    }
}
