use crate::device_camera::interface::DeviceCamera;
use crate::gesture_classifier::gesture::RawImage;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    resolution: (u32, u32),
    frame_counter: AtomicU32,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            resolution: (640, 480),
            frame_counter: AtomicU32::new(0),
        }
    }

    fn render_frame(&self, frame: u32) -> DynamicImage {
        let (width, height) = self.resolution;
        let shift = frame.wrapping_mul(37);
        DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([
                (x.wrapping_add(shift) % 256) as u8,
                (y.wrapping_add(shift) % 256) as u8,
                ((x ^ y) % 256) as u8,
            ])
        }))
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Camera started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture(&self) -> Result<RawImage, Box<dyn std::error::Error + Send + Sync>> {
        let frame = self.frame_counter.fetch_add(1, Ordering::SeqCst);
        self.logger.info(&format!("Capturing frame {}", frame))?;

        let mut bytes = Vec::new();
        self.render_frame(frame)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

        Ok(RawImage::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;

    #[test]
    fn test_captures_decodable_png() {
        let logger = Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()));
        let camera = DeviceCameraFake::new(logger);

        let raw = camera.capture().unwrap();
        let image = image::load_from_memory(raw.as_bytes()).unwrap();

        assert_eq!((image.width(), image.height()), (640, 480));
        assert_ne!(camera.capture().unwrap(), raw);
    }
}
