use std::fmt;

use crate::gesture_classifier::error::InferenceError;

/// Gesture classes in the order the model emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    ThumbsUp,
    ThumbsDown,
    Peace,
}

impl Gesture {
    pub const ALL: [Gesture; 3] = [Gesture::ThumbsUp, Gesture::ThumbsDown, Gesture::Peace];

    pub fn index(&self) -> usize {
        match self {
            Gesture::ThumbsUp => 0,
            Gesture::ThumbsDown => 1,
            Gesture::Peace => 2,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Gesture::ThumbsUp => "thumbs_up",
            Gesture::ThumbsDown => "thumbs_down",
            Gesture::Peace => "peace",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            Gesture::ThumbsUp => "👍 Thumbs up",
            Gesture::ThumbsDown => "👎 Thumbs down",
            Gesture::Peace => "✌️ Peace",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Encoded image bytes as delivered by a camera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    bytes: Vec<u8>,
}

impl RawImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for RawImage {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

/// One probability per gesture, indexed by `Gesture::index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityVector([f32; 3]);

impl ProbabilityVector {
    pub fn get(&self, gesture: Gesture) -> f32 {
        self.0[gesture.index()]
    }

    pub fn values(&self) -> [f32; 3] {
        self.0
    }
}

impl TryFrom<Vec<f32>> for ProbabilityVector {
    type Error = InferenceError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        let values: [f32; 3] = values.try_into().map_err(|values: Vec<f32>| {
            InferenceError::new(format!(
                "expected {} class probabilities, model returned {}",
                Gesture::ALL.len(),
                values.len()
            ))
        })?;

        if let Some(bad) = values
            .iter()
            .find(|p| !p.is_finite() || **p < 0.0 || **p > 1.0)
        {
            return Err(InferenceError::new(format!(
                "probability {} is outside [0, 1]",
                bad
            )));
        }

        Ok(Self(values))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledResult {
    pub gesture: Gesture,
    pub probability: f32,
    pub passed_threshold: bool,
}

impl LabeledResult {
    pub fn class_name(&self) -> &'static str {
        self.gesture.class_name()
    }
}
