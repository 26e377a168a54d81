use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::gesture_classifier::classify::GestureClassifier;
use crate::gesture_classifier::decide::detected;
use crate::library::logger::interface::Logger;
use crate::render::{Outcome, Render};
use std::sync::{Arc, Mutex};

pub struct App {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    gesture_classifier: GestureClassifier,
    render: Render,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        gesture_classifier: GestureClassifier,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("app"),
            render: Render::new(device_display.clone()),
            device_camera,
            device_display,
            gesture_classifier,
        }
    }

    /// Runs `capture_count` captures. The camera is stopped even when a
    /// capture aborts; the capture error wins over a stop error.
    pub fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_camera.start()?;

        let captured = self.run_captures();
        let stopped = self.device_camera.stop();

        captured?;
        stopped
    }

    fn run_captures(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_display
            .lock()
            .map_err(|_| "display lock poisoned")?
            .init()?;

        for capture in 0..self.config.capture_count {
            if capture > 0 {
                std::thread::sleep(self.config.capture_interval);
            }
            // already logged and rendered
            let _outcome = self.capture_once()?;
        }

        Ok(())
    }

    /// Capture, classify, render. Classification failures are shown to the
    /// user and returned, camera and display failures abort.
    pub fn capture_once(&self) -> Result<Outcome, Box<dyn std::error::Error + Send + Sync>> {
        let raw = self.device_camera.capture()?;

        let outcome = self.gesture_classifier.classify(&raw);

        match &outcome {
            Ok(results) => {
                let passing: Vec<String> = detected(results)
                    .map(|r| format!("{}={:.3}", r.class_name(), r.probability))
                    .collect();
                if passing.is_empty() {
                    self.logger.warn("No gesture above threshold")?;
                } else {
                    self.logger
                        .info(&format!("Detected {}", passing.join(", ")))?;
                }
            }
            Err(err) => self.logger.error(&err.to_string())?,
        }

        self.render.render(&outcome)?;

        Ok(outcome)
    }
}
