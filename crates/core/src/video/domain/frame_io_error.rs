use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameIoError {
    #[error("failed to read {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid frame on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode frame {index}: {source}")]
    Encode {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write frames: {0}")]
    Write(#[source] std::io::Error),
    #[error("reader is not open")]
    NotOpen,
    #[error("writer is closed")]
    Closed,
}
