use crate::device_camera::interface::DeviceCamera;
use crate::gesture_classifier::gesture::RawImage;
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Serves photos from disk, cycling through `paths` in order.
pub struct DeviceCameraFile {
    logger: Arc<dyn Logger + Send + Sync>,
    paths: Vec<PathBuf>,
    next: AtomicUsize,
}

impl DeviceCameraFile {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        paths: Vec<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if paths.is_empty() {
            return Err("file camera needs at least one image path".into());
        }

        Ok(Self {
            logger: logger.with_namespace("camera").with_namespace("file"),
            paths,
            next: AtomicUsize::new(0),
        })
    }
}

impl DeviceCamera for DeviceCameraFile {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Starting camera with {} image(s)", self.paths.len()))?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture(&self) -> Result<RawImage, Box<dyn std::error::Error + Send + Sync>> {
        let index = self.next.fetch_add(1, Ordering::SeqCst) % self.paths.len();
        let path = &self.paths[index];

        self.logger.info(&format!("Capturing {}", path.display()))?;

        let bytes = std::fs::read(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;

        Ok(RawImage::new(bytes))
    }
}
