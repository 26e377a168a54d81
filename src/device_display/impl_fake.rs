use crate::device_display::interface::{DeviceDisplay, Tone};
use std::error::Error;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Screen {
    initialized: bool,
    pending: Vec<(Tone, String)>,
    shown: Vec<(Tone, String)>,
    presents: usize,
}

/// Keeps whatever is currently on screen so tests can read it back.
#[derive(Clone, Default)]
pub struct DeviceDisplayFake {
    screen: Arc<Mutex<Screen>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines from the most recent `present`.
    pub fn lines(&self) -> Vec<(Tone, String)> {
        self.screen
            .lock()
            .map(|s| s.shown.clone())
            .unwrap_or_default()
    }

    pub fn presents(&self) -> usize {
        self.screen.lock().map(|s| s.presents).unwrap_or(0)
    }

    pub fn is_initialized(&self) -> bool {
        self.screen.lock().map(|s| s.initialized).unwrap_or(false)
    }

    fn with_screen(
        &self,
        f: impl FnOnce(&mut Screen),
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut screen = self.screen.lock().map_err(|_| "display state poisoned")?;
        f(&mut screen);
        Ok(())
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_screen(|s| s.initialized = true)
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_screen(|s| s.pending.clear())
    }

    fn write_line(&mut self, tone: Tone, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_screen(|s| s.pending.push((tone, text.to_string())))
    }

    fn present(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_screen(|s| {
            s.shown = s.pending.clone();
            s.presents += 1;
        })
    }
}
