use crate::shared::constants::{
    AGE_LAYER_NAME, DETECTION_TENSOR_NAME, EMOTION_LAYER_NAME, GENDER_LAYER_NAME,
};
use crate::shared::tensor::Tensor;

/// What a tensor carries, resolved once from its name and layer name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TensorKind {
    /// Bounding-box / confidence output. Never labeled.
    Detection,
    AgeRegression,
    GenderProbability,
    EmotionProbability,
    Unknown,
}

impl TensorKind {
    /// The detection marker on `name` wins over any layer name.
    pub fn resolve(name: &str, layer_name: &str) -> Self {
        if name == DETECTION_TENSOR_NAME {
            return TensorKind::Detection;
        }
        match layer_name {
            AGE_LAYER_NAME => TensorKind::AgeRegression,
            GENDER_LAYER_NAME => TensorKind::GenderProbability,
            EMOTION_LAYER_NAME => TensorKind::EmotionProbability,
            _ => TensorKind::Unknown,
        }
    }

    pub fn of(tensor: &Tensor) -> Self {
        Self::resolve(tensor.name(), tensor.layer_name())
    }
}
