use ndarray::ArrayView1;

use crate::labeling::domain::attribute_label::{AttributeLabel, Emotion, Gender};
use crate::labeling::domain::label_error::LabelError;
use crate::labeling::domain::tensor_kind::TensorKind;
use crate::shared::constants::{AGE_SCALE, GENDER_THRESHOLD, MALE_CLASS_INDEX};

/// Decodes a classifier output buffer under the rules for its kind.
///
/// Returns `Ok(None)` for kinds that carry no attribute (detections and
/// unrecognised layers). `layer` is only used to name the tensor in errors.
pub fn decode(
    kind: TensorKind,
    layer: &str,
    data: ArrayView1<'_, f32>,
) -> Result<Option<AttributeLabel>, LabelError> {
    let label = match kind {
        TensorKind::Detection | TensorKind::Unknown => return Ok(None),
        TensorKind::AgeRegression => AttributeLabel::Age(decode_age(layer, data)?),
        TensorKind::GenderProbability => AttributeLabel::Gender(decode_gender(layer, data)?),
        TensorKind::EmotionProbability => AttributeLabel::Emotion(decode_emotion(layer, data)?),
    };
    Ok(Some(label))
}

/// `trunc(data[0] * 100)`, evaluated in double precision so values like
/// 0.29 truncate the same way they would on the host.
fn decode_age(layer: &str, data: ArrayView1<'_, f32>) -> Result<i64, LabelError> {
    let value = *data.first().ok_or_else(|| LabelError::EmptyData {
        layer: layer.to_string(),
    })?;
    if !value.is_finite() {
        return Err(LabelError::NonFinite {
            layer: layer.to_string(),
            value,
        });
    }
    let years = (f64::from(value) * AGE_SCALE).trunc();
    // i64::MAX is not exactly representable; its f64 rounds up to 2^63.
    if !(i64::MIN as f64..i64::MAX as f64).contains(&years) {
        return Err(LabelError::AgeOutOfRange {
            layer: layer.to_string(),
            years,
        });
    }
    Ok(years as i64)
}

/// Male when the male-class probability is strictly above the threshold.
fn decode_gender(layer: &str, data: ArrayView1<'_, f32>) -> Result<Gender, LabelError> {
    let male = *data.get(MALE_CLASS_INDEX).ok_or_else(|| LabelError::TooShort {
        layer: layer.to_string(),
        expected: MALE_CLASS_INDEX + 1,
        actual: data.len(),
    })?;
    Ok(if male > GENDER_THRESHOLD {
        Gender::Male
    } else {
        Gender::Female
    })
}

fn decode_emotion(layer: &str, data: ArrayView1<'_, f32>) -> Result<Emotion, LabelError> {
    let index = argmax(data).ok_or_else(|| LabelError::EmptyData {
        layer: layer.to_string(),
    })?;
    Emotion::from_index(index).ok_or(LabelError::UnknownEmotion { index })
}

/// Index of the first maximum; `None` for an empty buffer.
fn argmax(data: ArrayView1<'_, f32>) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &value) in data.iter().enumerate() {
        if best.map_or(true, |(_, top)| value > top) {
            best = Some((i, value));
        }
    }
    best.map(|(i, _)| i)
}
