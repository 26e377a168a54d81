use thiserror::Error;

/// The captured bytes could not be interpreted as an image.
#[derive(Debug, Error)]
#[error("captured data is not a decodable image: {source}")]
pub struct DecodeError {
    #[from]
    source: image::ImageError,
}

/// The model provider failed or returned output that breaks its contract.
#[derive(Debug, Error)]
#[error("model inference failed: {source}")]
pub struct InferenceError {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl InferenceError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}
