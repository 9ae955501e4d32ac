use serde::{Deserialize, Serialize};

use crate::shared::tensor::Tensor;

/// A detected face and the inference outputs attached to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    tensors: Vec<Tensor>,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            tensors: Vec::new(),
        }
    }

    pub fn with_tensor(mut self, tensor: Tensor) -> Self {
        self.tensors.push(tensor);
        self
    }

    pub fn add_tensor(&mut self, tensor: Tensor) {
        self.tensors.push(tensor);
    }

    pub fn tensors(&self) -> &[Tensor] {
        &self.tensors
    }

    pub fn tensors_mut(&mut self) -> &mut [Tensor] {
        &mut self.tensors
    }

    /// Overlay text for this region: assigned labels in tensor order,
    /// trimmed and space separated. Empty when nothing is labeled.
    pub fn caption(&self) -> String {
        self.tensors
            .iter()
            .filter_map(Tensor::label)
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(layer: &str, label: &str) -> Tensor {
        let mut tensor = Tensor::new(layer, layer, vec![0.0]);
        tensor.set_label(label);
        tensor
    }

    #[test]
    fn test_new_region_has_no_tensors() {
        let region = Region::new(10, 20, 64, 48);
        assert_eq!((region.x, region.y, region.width, region.height), (10, 20, 64, 48));
        assert!(region.tensors().is_empty());
    }

    #[test]
    fn test_tensors_keep_insertion_order() {
        let mut region = Region::new(0, 0, 10, 10)
            .with_tensor(Tensor::new("detection", "detection_out", vec![0.9]));
        region.add_tensor(Tensor::new("age", "age_conv3", vec![0.3]));

        let names: Vec<_> = region.tensors().iter().map(Tensor::name).collect();
        assert_eq!(names, vec!["detection", "age"]);
    }

    #[test]
    fn test_tensors_mut_allows_labeling() {
        let mut region = Region::new(0, 0, 10, 10).with_tensor(Tensor::new("g", "prob", vec![]));
        region.tensors_mut()[0].set_label(" M ");
        assert_eq!(region.tensors()[0].label(), Some(" M "));
    }

    #[test]
    fn test_caption_joins_trimmed_labels() {
        let region = Region::new(0, 0, 10, 10)
            .with_tensor(labeled("age_conv3", "37"))
            .with_tensor(labeled("prob", " M "))
            .with_tensor(labeled("prob_emotion", "happy"));
        assert_eq!(region.caption(), "37 M happy");
    }

    #[test]
    fn test_caption_skips_unlabeled_tensors() {
        let region = Region::new(0, 0, 10, 10)
            .with_tensor(Tensor::new("detection", "detection_out", vec![0.9]))
            .with_tensor(labeled("prob", " F "));
        assert_eq!(region.caption(), "F");
    }

    #[test]
    fn test_caption_empty_without_labels() {
        let region = Region::new(0, 0, 10, 10);
        assert_eq!(region.caption(), "");
    }

    #[test]
    fn test_missing_tensors_field_deserialises_empty() {
        let region: Region =
            serde_json::from_str(r#"{"x":1,"y":2,"width":3,"height":4}"#).unwrap();
        assert!(region.tensors().is_empty());
    }
}
