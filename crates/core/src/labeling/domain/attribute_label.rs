use std::fmt;

use crate::shared::constants::{EMOTION_NAMES, FEMALE_LABEL, MALE_LABEL};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str(MALE_LABEL),
            Gender::Female => f.write_str(FEMALE_LABEL),
        }
    }
}

/// Emotion classes in softmax order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emotion {
    Neutral,
    Happy,
    Sad,
    Surprise,
    Anger,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Neutral,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Surprise,
        Emotion::Anger,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        EMOTION_NAMES[self as usize]
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded face attribute. `Display` yields the exact label text the
/// host expects on the tensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeLabel {
    /// Years, truncated toward zero.
    Age(i64),
    Gender(Gender),
    Emotion(Emotion),
}

impl fmt::Display for AttributeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeLabel::Age(years) => write!(f, "{years}"),
            AttributeLabel::Gender(gender) => write!(f, "{gender}"),
            AttributeLabel::Emotion(emotion) => write!(f, "{emotion}"),
        }
    }
}
