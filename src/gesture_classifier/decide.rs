use crate::gesture_classifier::gesture::{Gesture, LabeledResult, ProbabilityVector};

pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Evaluates every gesture independently against `threshold`.
///
/// Returns one entry per gesture in class order, whether or not it passed.
/// Several gestures may pass at once, and none passing is the
/// "nothing recognized" outcome rather than an error.
pub fn decide(probabilities: &ProbabilityVector, threshold: f32) -> Vec<LabeledResult> {
    Gesture::ALL
        .iter()
        .map(|&gesture| {
            let probability = probabilities.get(gesture);
            LabeledResult {
                gesture,
                probability,
                passed_threshold: probability > threshold,
            }
        })
        .collect()
}

pub fn detected(results: &[LabeledResult]) -> impl Iterator<Item = &LabeledResult> {
    results.iter().filter(|r| r.passed_threshold)
}
