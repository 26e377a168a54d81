use crate::gesture_classifier::gesture::RawImage;

pub trait DeviceCamera: Send + Sync {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    /// One photo per call, still encoded.
    fn capture(&self) -> Result<RawImage, Box<dyn std::error::Error + Send + Sync>>;
}
