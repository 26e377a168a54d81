use crate::device_display::interface::{DeviceDisplay, Tone};
use crate::gesture_classifier::decide::detected;
use crate::gesture_classifier::error::ClassifyError;
use crate::gesture_classifier::gesture::{Gesture, LabeledResult};
use std::sync::{Arc, Mutex};

pub type Outcome = Result<Vec<LabeledResult>, ClassifyError>;

pub const RESULTS_HEADER: &str = "Prediction results:";
pub const NOTHING_RECOGNIZED: &str = "No gesture recognized with high probability. Try again!";

fn tone_for(gesture: Gesture) -> Tone {
    match gesture {
        Gesture::ThumbsUp => Tone::Success,
        Gesture::ThumbsDown => Tone::Error,
        Gesture::Peace => Tone::Info,
    }
}

/// Turns one capture outcome into the lines a person sees.
pub fn lines_for(outcome: &Outcome) -> Vec<(Tone, String)> {
    match outcome {
        Err(ClassifyError::Decode(err)) => vec![(
            Tone::Error,
            format!("Could not read the captured image: {}", err),
        )],
        Err(ClassifyError::Inference(err)) => {
            vec![(Tone::Error, format!("Error during prediction: {}", err))]
        }
        Ok(results) => {
            let mut lines = vec![(Tone::Info, RESULTS_HEADER.to_string())];

            lines.extend(detected(results).map(|r| {
                (
                    tone_for(r.gesture),
                    format!(
                        "{}, probability: {:.2}%",
                        r.gesture.display_label(),
                        r.probability * 100.0
                    ),
                )
            }));

            if lines.len() == 1 {
                lines.push((Tone::Warning, NOTHING_RECOGNIZED.to_string()));
            }

            lines
        }
    }
}

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self { device_display }
    }

    pub fn render(&self, outcome: &Outcome) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self
            .device_display
            .lock()
            .map_err(|_| "display lock poisoned")?;

        device_display.clear()?;

        for (tone, text) in lines_for(outcome) {
            device_display.write_line(tone, &text)?;
        }

        device_display.present()?;

        Ok(())
    }
}
