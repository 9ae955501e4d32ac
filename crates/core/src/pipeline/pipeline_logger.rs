use std::collections::BTreeMap;
use std::time::Instant;

/// Observer for labeling pipeline events.
///
/// Use cases report through this trait so callers choose where progress,
/// timings and metrics end up.
pub trait PipelineLogger: Send {
    /// Report frame-level progress.
    fn progress(&mut self, current: usize, total: usize);

    /// Record how long a named stage took for one frame.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a per-frame count (regions, labels, ...).
    fn metric(&mut self, name: &str, value: f64);

    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Discards every event.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Running total and sample count for one stage or metric.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Series {
    pub total: f64,
    pub count: usize,
}

impl Series {
    fn push(&mut self, value: f64) {
        self.total += value;
        self.count += 1;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// Forwards events to the `log` crate and aggregates stage timings and
/// metrics for a final summary.
///
/// Progress lines are emitted every `every` frames and on the last frame.
pub struct LogPipelineLogger {
    every: usize,
    timings: BTreeMap<String, Series>,
    metrics: BTreeMap<String, Series>,
    started: Instant,
    frames: usize,
    report_summary: bool,
}

impl LogPipelineLogger {
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
            timings: BTreeMap::new(),
            metrics: BTreeMap::new(),
            started: Instant::now(),
            frames: 0,
            report_summary: true,
        }
    }

    /// Disables the end-of-run summary; aggregation still happens.
    pub fn without_summary(mut self) -> Self {
        self.report_summary = false;
        self
    }

    pub fn timing_series(&self, stage: &str) -> Option<Series> {
        self.timings.get(stage).copied()
    }

    pub fn metric_series(&self, name: &str) -> Option<Series> {
        self.metrics.get(name).copied()
    }

    /// Formatted summary, or `None` if nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!(
            "Labeling summary ({} frames, {:.1}s total):",
            self.frames,
            elapsed_ms / 1000.0
        )];

        for (stage, series) in &self.timings {
            lines.push(format!(
                "  {stage:8}: avg {:6.2}ms  total {:7.1}ms",
                series.mean(),
                series.total
            ));
        }
        for (name, series) in &self.metrics {
            lines.push(format!(
                "  {name}: avg {:.1}  total {:.0}",
                series.mean(),
                series.total
            ));
        }
        if self.frames > 0 && elapsed_ms > 0.0 {
            let fps = self.frames as f64 / (elapsed_ms / 1000.0);
            lines.push(format!("  Throughput: {fps:.1} fps"));
        }

        Some(lines.join("\n"))
    }
}

impl Default for LogPipelineLogger {
    fn default() -> Self {
        Self::new(crate::shared::constants::DEFAULT_PROGRESS_EVERY)
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.frames = current;
        if current % self.every == 0 || current == total {
            if total > 0 {
                let pct = current as f64 / total as f64 * 100.0;
                log::info!("Labeled {current}/{total} frames ({pct:.1}%)");
            } else {
                log::info!("Labeled {current} frames");
            }
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings.entry(stage.to_string()).or_default().push(duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics.entry(name.to_string()).or_default().push(value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if !self.report_summary {
            return;
        }
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
