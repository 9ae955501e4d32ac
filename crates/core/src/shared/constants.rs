/// Tensor name the detector assigns to bounding-box output.
pub const DETECTION_TENSOR_NAME: &str = "detection";

pub const AGE_LAYER_NAME: &str = "age_conv3";
pub const GENDER_LAYER_NAME: &str = "prob";
pub const EMOTION_LAYER_NAME: &str = "prob_emotion";

/// The age regressor outputs years / 100.
pub const AGE_SCALE: f64 = 100.0;

/// Index of the "male" class in the gender softmax.
pub const MALE_CLASS_INDEX: usize = 1;

/// Male probability must be strictly above this to label " M ".
pub const GENDER_THRESHOLD: f32 = 0.5;

pub const MALE_LABEL: &str = " M ";
pub const FEMALE_LABEL: &str = " F ";

/// Emotion classes in the order of the emotion model's softmax output.
pub const EMOTION_NAMES: [&str; 5] = ["neutral", "happy", "sad", "surprise", "anger"];

/// Frames between progress log lines in the CLI.
pub const DEFAULT_PROGRESS_EVERY: usize = 10;
