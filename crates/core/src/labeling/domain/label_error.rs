use thiserror::Error;

/// A tensor whose buffer cannot be decoded under its layer's rules.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LabelError {
    #[error("tensor for layer '{layer}' has no data")]
    EmptyData { layer: String },
    #[error("tensor for layer '{layer}' needs at least {expected} values, got {actual}")]
    TooShort {
        layer: String,
        expected: usize,
        actual: usize,
    },
    #[error("tensor for layer '{layer}' holds non-finite value {value}")]
    NonFinite { layer: String, value: f32 },
    #[error("tensor for layer '{layer}' decodes to age {years}, outside the representable range")]
    AgeOutOfRange { layer: String, years: f64 },
    #[error("emotion argmax index {index} has no known emotion name")]
    UnknownEmotion { index: usize },
}
