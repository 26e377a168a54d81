use crate::device_display::interface::{DeviceDisplay, Tone};
use eframe::egui;
use std::error::Error;
use std::fmt::Display;
use std::sync::{Arc, Mutex};

type Lines = Arc<Mutex<Vec<(Tone, String)>>>;

fn tone_color(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Success => egui::Color32::from_rgb(39, 174, 96),
        Tone::Error => egui::Color32::from_rgb(192, 57, 43),
        Tone::Info => egui::Color32::from_rgb(41, 128, 185),
        Tone::Warning => egui::Color32::from_rgb(211, 145, 0),
    }
}

struct ResultWindow {
    shown: Lines,
}

impl eframe::App for ResultWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Ok(lines) = self.shown.lock() else {
            return;
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading("Gesture recognition");
                ui.label("Recognizes thumbs up, thumbs down and peace signs.");
                ui.separator();

                for (tone, text) in lines.iter() {
                    ui.label(
                        egui::RichText::new(text)
                            .color(tone_color(*tone))
                            .size(18.0),
                    );
                }
            });
        });

        // results arrive from the capture thread
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

fn window_closed<E: Display>(result: Result<(), E>) -> Result<(), Box<dyn Error + Send + Sync>> {
    result.map_err(|e| format!("result window failed: {}", e).into())
}

/// Results window. Lines written through `DeviceDisplay` become visible on
/// `present`; the window itself is driven by `run_window`.
#[derive(Clone)]
pub struct DeviceDisplayGui {
    pending: Vec<(Tone, String)>,
    shown: Lines,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            shown: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn shown(&self) -> Vec<(Tone, String)> {
        self.shown.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Opens the window and blocks until it is closed. Must be called on the
    /// main thread; winit refuses to start an event loop anywhere else.
    pub fn run_window(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([480.0, 320.0])
                .with_resizable(true),
            ..Default::default()
        };

        let window = ResultWindow {
            shown: self.shown.clone(),
        };

        window_closed(eframe::run_native(
            "Gesture Recognizer",
            options,
            Box::new(|_cc| Box::new(window)),
        ))
    }
}

impl Default for DeviceDisplayGui {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.pending.clear();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.pending.clear();
        Ok(())
    }

    fn write_line(&mut self, tone: Tone, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.pending.push((tone, text.to_string()));
        Ok(())
    }

    fn present(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.shown.lock().map_err(|_| "display buffer poisoned")? = self.pending.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_appear_only_on_present() {
        let mut display = DeviceDisplayGui::new();
        let window_side = display.clone();
        display.init().unwrap();

        display.write_line(Tone::Info, "Prediction results:").unwrap();
        display.write_line(Tone::Success, "👍 Thumbs up").unwrap();
        assert!(window_side.shown().is_empty());

        display.present().unwrap();
        assert_eq!(
            window_side.shown(),
            vec![
                (Tone::Info, "Prediction results:".to_string()),
                (Tone::Success, "👍 Thumbs up".to_string()),
            ]
        );
    }

    #[test]
    fn test_clear_replaces_previous_outcome() {
        let mut display = DeviceDisplayGui::new();
        display.write_line(Tone::Success, "👍 Thumbs up").unwrap();
        display.present().unwrap();

        display.clear().unwrap();
        // still showing the last outcome until the next one is presented
        assert_eq!(display.shown().len(), 1);

        display.write_line(Tone::Warning, "Try again!").unwrap();
        display.present().unwrap();
        assert_eq!(display.shown(), vec![(Tone::Warning, "Try again!".to_string())]);
    }

    #[test]
    fn test_window_failure_is_reported() {
        assert!(window_closed::<String>(Ok(())).is_ok());

        let err = window_closed(Err("no display server")).unwrap_err();
        assert!(err.to_string().contains("result window failed"));
        assert!(err.to_string().contains("no display server"));
    }
}
