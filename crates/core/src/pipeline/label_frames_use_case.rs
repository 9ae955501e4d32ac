use std::path::Path;
use std::time::Instant;

use thiserror::Error;

use crate::labeling::domain::frame_processor::FrameProcessor;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::frame::Frame;
use crate::video::domain::frame_reader::FrameReader;
use crate::video::domain::frame_writer::FrameWriter;

/// A frame processor failure, tagged with the frame it happened on.
#[derive(Error, Debug)]
#[error("frame {index}: {source}")]
pub struct FrameProcessError {
    pub index: usize,
    #[source]
    pub source: Box<dyn std::error::Error>,
}

/// Counts reported by a finished labeling run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelRunStats {
    pub frames: usize,
    pub regions: usize,
    pub labels: usize,
    /// Set when the processor asked the pipeline to stop early.
    pub stopped_early: bool,
}

/// Recorded-frame labeling pipeline: read → process → write.
///
/// Plays the host role for a `FrameProcessor`: calls it once per frame in
/// source order and honours its continue flag. A frame is written before
/// the flag is checked, so the frame that requested the stop is kept.
pub struct LabelFramesUseCase {
    reader: Box<dyn FrameReader>,
    writer: Box<dyn FrameWriter>,
    processor: Box<dyn FrameProcessor>,
    logger: Box<dyn PipelineLogger>,
}

impl LabelFramesUseCase {
    pub fn new(
        reader: Box<dyn FrameReader>,
        writer: Box<dyn FrameWriter>,
        processor: Box<dyn FrameProcessor>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader,
            writer,
            processor,
            logger,
        }
    }

    pub fn execute(&mut self, input_path: &Path) -> Result<LabelRunStats, Box<dyn std::error::Error>> {
        let metadata = self.reader.open(input_path)?;
        let total = metadata.total_frames;
        self.logger
            .info(&format!("Labeling {total} frames from {}", input_path.display()));

        let result = self.run(total);
        self.reader.close();
        let close_result = self.writer.close();

        let stats = result?;
        close_result?;
        self.logger.summary();
        Ok(stats)
    }

    fn run(&mut self, total: usize) -> Result<LabelRunStats, Box<dyn std::error::Error>> {
        let mut stats = LabelRunStats::default();
        let mut frames = self.reader.frames();

        loop {
            let t0 = Instant::now();
            let Some(next) = frames.next() else {
                break;
            };
            let mut frame = next?;
            self.logger.timing("read", elapsed_ms(t0));

            let t1 = Instant::now();
            let keep_going = self
                .processor
                .process_frame(&mut frame)
                .map_err(|source| FrameProcessError {
                    index: frame.index(),
                    source,
                })?;
            self.logger.timing("label", elapsed_ms(t1));

            let t2 = Instant::now();
            self.writer.write(&frame)?;
            self.logger.timing("write", elapsed_ms(t2));

            let labels = self.processor.last_frame_labels();
            stats.frames += 1;
            stats.regions += frame.regions().len();
            stats.labels += labels;
            self.logger.metric("regions", frame.regions().len() as f64);
            self.logger.metric("labels", labels as f64);
            self.logger.progress(stats.frames, total);

            if !keep_going {
                self.logger
                    .info(&format!("Processor stopped the pipeline at frame {}", frame.index()));
                stats.stopped_early = true;
                break;
            }
        }

        Ok(stats)
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
