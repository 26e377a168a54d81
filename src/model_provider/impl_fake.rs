use crate::gesture_classifier::preprocess::NormalizedTensor;
use crate::model_provider::interface::ModelProvider;
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
enum Behavior {
    Fixed(Vec<f32>),
    Random,
    Fail(String),
}

pub struct ModelProviderFake {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl ModelProviderFake {
    /// Random scores normalized to sum to one, like a softmax head.
    pub fn new() -> Self {
        Self::with_behavior(Behavior::Random)
    }

    pub fn with_probabilities(probabilities: Vec<f32>) -> Self {
        Self::with_behavior(Behavior::Fixed(probabilities))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_behavior(Behavior::Fail(message.to_string()))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for ModelProviderFake {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelProvider for ModelProviderFake {
    fn predict(
        &self,
        _input: &NormalizedTensor,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            Behavior::Fixed(probabilities) => Ok(probabilities.clone()),
            Behavior::Fail(message) => Err(message.clone().into()),
            Behavior::Random => {
                let mut rng = rand::rng();
                let score_dist = Uniform::new(0.0f32, 1.0)?;
                let scores: Vec<f32> = (0..3).map(|_| score_dist.sample(&mut rng)).collect();
                let total: f32 = scores.iter().sum();
                if total <= f32::EPSILON {
                    return Ok(vec![1.0 / 3.0; 3]);
                }
                Ok(scores.iter().map(|s| s / total).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture_classifier::preprocess::preprocess_image;
    use image::DynamicImage;

    fn input() -> NormalizedTensor {
        preprocess_image(&DynamicImage::new_rgb8(4, 4))
    }

    #[test]
    fn test_random_scores_look_like_softmax() {
        let provider = ModelProviderFake::new();
        let scores = provider.predict(&input()).unwrap();
        assert_eq!(scores.len(), 3);
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
        assert!((scores.iter().sum::<f32>() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_counts_calls() {
        let provider = ModelProviderFake::with_probabilities(vec![0.1, 0.2, 0.7]);
        assert_eq!(provider.calls(), 0);
        assert_eq!(provider.predict(&input()).unwrap(), vec![0.1, 0.2, 0.7]);
        assert!(ModelProviderFake::failing("boom").predict(&input()).is_err());
        assert_eq!(provider.calls(), 1);
    }
}
