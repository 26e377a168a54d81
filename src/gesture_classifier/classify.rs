use crate::gesture_classifier::decide::{decide, DEFAULT_THRESHOLD};
use crate::gesture_classifier::error::{ClassifyError, InferenceError};
use crate::gesture_classifier::gesture::{LabeledResult, ProbabilityVector, RawImage};
use crate::gesture_classifier::preprocess::preprocess;
use crate::model_provider::interface::ModelProvider;
use std::sync::Arc;

/// Raw capture in, per-gesture verdicts out.
///
/// Holds no per-call state, so one instance can serve any number of
/// captures, including concurrently.
#[derive(Clone)]
pub struct GestureClassifier {
    model_provider: Arc<dyn ModelProvider + Send + Sync>,
    threshold: f32,
}

impl GestureClassifier {
    pub fn new(model_provider: Arc<dyn ModelProvider + Send + Sync>) -> Self {
        Self {
            model_provider,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn classify(&self, raw: &RawImage) -> Result<Vec<LabeledResult>, ClassifyError> {
        let input = preprocess(raw)?;

        let scores = self
            .model_provider
            .predict(&input)
            .map_err(InferenceError::new)?;

        let probabilities = ProbabilityVector::try_from(scores)?;

        Ok(decide(&probabilities, self.threshold))
    }
}
