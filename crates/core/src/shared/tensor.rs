use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// One named inference output attached to a region.
///
/// `label` starts unset and is written by the labeling stage; it is skipped
/// when serialising until then.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tensor {
    name: String,
    layer_name: String,
    data: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Tensor {
    pub fn new(name: impl Into<String>, layer_name: impl Into<String>, data: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            layer_name: layer_name.into(),
            data,
            label: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layer_name(&self) -> &str {
        &self.layer_name
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ndarray(&self) -> ArrayView1<'_, f32> {
        ArrayView1::from(self.data.as_slice())
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }
}
