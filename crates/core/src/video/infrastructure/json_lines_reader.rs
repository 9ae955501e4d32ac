use std::fs;
use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::stream_metadata::StreamMetadata;
use crate::video::domain::frame_io_error::FrameIoError;
use crate::video::domain::frame_reader::FrameReader;

/// Reads frames from a JSON Lines file, one serialised `Frame` per line.
///
/// The file is loaded on `open` so the frame count is known before
/// iteration starts; each line is parsed lazily. Blank lines are skipped
/// but still count toward the line numbers reported in errors.
pub struct JsonLinesReader {
    lines: Option<Vec<(usize, String)>>,
}

impl JsonLinesReader {
    pub fn new() -> Self {
        Self { lines: None }
    }
}

impl Default for JsonLinesReader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_line(line: usize, text: &str) -> Result<Frame, Box<dyn std::error::Error>> {
    let frame = serde_json::from_str(text).map_err(|source| FrameIoError::Parse { line, source })?;
    Ok(frame)
}

impl FrameReader for JsonLinesReader {
    fn open(&mut self, path: &Path) -> Result<StreamMetadata, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path).map_err(|source| FrameIoError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let lines: Vec<(usize, String)> = content
            .lines()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(i, text)| (i + 1, text.to_string()))
            .collect();

        let metadata = StreamMetadata {
            total_frames: lines.len(),
            source_path: Some(path.to_path_buf()),
        };
        log::debug!("Opened {} ({} frames)", path.display(), lines.len());
        self.lines = Some(lines);
        Ok(metadata)
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        match &self.lines {
            Some(lines) => Box::new(lines.iter().map(|(line, text)| parse_line(*line, text))),
            None => {
                let err: Box<dyn std::error::Error> = FrameIoError::NotOpen.into();
                Box::new(std::iter::once(Err(err)))
            }
        }
    }

    fn close(&mut self) {
        self.lines = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_file(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("frames.jsonl");
        fs::write(&path, content).unwrap();
        path
    }

    const TWO_FRAMES: &str = concat!(
        r#"{"index":0,"regions":[{"x":1,"y":2,"width":30,"height":40,"tensors":[{"name":"age","layer_name":"age_conv3","data":[0.37]}]}]}"#,
        "\n",
        r#"{"index":1,"regions":[]}"#,
        "\n",
    );

    #[test]
    fn test_open_counts_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, TWO_FRAMES);
        let mut reader = JsonLinesReader::new();

        let meta = reader.open(&path).unwrap();

        assert_eq!(meta.total_frames, 2);
        assert_eq!(meta.source_path, Some(path));
    }

    #[test]
    fn test_frames_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, TWO_FRAMES);
        let mut reader = JsonLinesReader::new();
        reader.open(&path).unwrap();

        let frames: Vec<Frame> = reader.frames().map(|f| f.unwrap()).collect();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].index(), 0);
        assert_eq!(frames[1].index(), 1);
        let tensor = &frames[0].regions()[0].tensors()[0];
        assert_eq!(tensor.layer_name(), "age_conv3");
        assert!(tensor.label().is_none());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "\n{\"index\":4}\n   \n{\"index\":5}\n\n");
        let mut reader = JsonLinesReader::new();

        let meta = reader.open(&path).unwrap();
        let indices: Vec<usize> = reader.frames().map(|f| f.unwrap().index()).collect();

        assert_eq!(meta.total_frames, 2);
        assert_eq!(indices, vec![4, 5]);
    }

    #[test]
    fn test_parse_error_names_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "{\"index\":0}\n\n{\"index\":\n");
        let mut reader = JsonLinesReader::new();
        reader.open(&path).unwrap();

        let results: Vec<_> = reader.frames().collect();

        assert!(results[0].is_ok());
        let err = results[1].as_ref().unwrap_err();
        assert!(err.to_string().contains("line 3"), "got: {err}");
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut reader = JsonLinesReader::new();
        let err = reader.open(&dir.path().join("missing.jsonl")).unwrap_err();
        assert!(err.to_string().contains("missing.jsonl"));
    }

    #[test]
    fn test_frames_before_open_is_error() {
        let mut reader = JsonLinesReader::new();
        let results: Vec<_> = reader.frames().collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }

    #[test]
    fn test_close_releases_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, TWO_FRAMES);
        let mut reader = JsonLinesReader::new();
        reader.open(&path).unwrap();
        reader.close();
        assert!(reader.frames().next().unwrap().is_err());
    }
}
