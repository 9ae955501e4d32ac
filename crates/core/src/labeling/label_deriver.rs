//! Attaches age, gender and emotion labels to classifier tensors.
//!
//! Derivation reads the frame through shared borrows and produces a list of
//! assignments; applying them is the only step that mutates the frame.

use crate::labeling::domain::attribute_label::AttributeLabel;
use crate::labeling::domain::frame_processor::FrameProcessor;
use crate::labeling::domain::label_decoder::decode;
use crate::labeling::domain::label_error::LabelError;
use crate::labeling::domain::tensor_kind::TensorKind;
use crate::shared::frame::Frame;

/// A decoded label and the tensor it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelAssignment {
    pub region: usize,
    pub tensor: usize,
    pub label: AttributeLabel,
}

/// Decodes every labelable tensor in the frame without touching it.
///
/// Fails on the first tensor whose buffer cannot be decoded.
pub fn derive_labels(frame: &Frame) -> Result<Vec<LabelAssignment>, LabelError> {
    let mut assignments = Vec::new();
    for (region_idx, region) in frame.regions().iter().enumerate() {
        for (tensor_idx, tensor) in region.tensors().iter().enumerate() {
            let kind = TensorKind::of(tensor);
            if kind == TensorKind::Unknown {
                log::debug!(
                    "Frame {}: no decoder for layer '{}'",
                    frame.index(),
                    tensor.layer_name()
                );
            }
            if let Some(label) = decode(kind, tensor.layer_name(), tensor.as_ndarray())? {
                assignments.push(LabelAssignment {
                    region: region_idx,
                    tensor: tensor_idx,
                    label,
                });
            }
        }
    }
    Ok(assignments)
}

/// Writes assignments onto their tensors. Out-of-range indices are skipped.
pub fn apply_labels(frame: &mut Frame, assignments: &[LabelAssignment]) {
    for a in assignments {
        if let Some(tensor) = frame
            .regions_mut()
            .get_mut(a.region)
            .and_then(|r| r.tensors_mut().get_mut(a.tensor))
        {
            tensor.set_label(a.label.to_string());
        }
    }
}

/// Labels the frame in place and signals the host to continue.
///
/// On error the frame is left exactly as it was.
pub fn process_frame(frame: &mut Frame) -> Result<bool, LabelError> {
    let assignments = derive_labels(frame)?;
    apply_labels(frame, &assignments);
    Ok(true)
}

/// `FrameProcessor` wrapper around [`process_frame`] that reports how
/// many labels each call wrote.
#[derive(Debug, Default)]
pub struct LabelDeriver {
    last_frame_labels: usize,
}

impl LabelDeriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameProcessor for LabelDeriver {
    fn process_frame(&mut self, frame: &mut Frame) -> Result<bool, Box<dyn std::error::Error>> {
        self.last_frame_labels = 0;
        let assignments = derive_labels(frame)?;
        apply_labels(frame, &assignments);
        self.last_frame_labels = assignments.len();
        Ok(true)
    }

    fn last_frame_labels(&self) -> usize {
        self.last_frame_labels
    }
}
