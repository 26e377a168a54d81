use crate::gesture_classifier::preprocess::NormalizedTensor;

/// Runs the trained model. Returns raw per-class scores in class order.
pub trait ModelProvider: Send + Sync {
    fn predict(
        &self,
        input: &NormalizedTensor,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;
}
