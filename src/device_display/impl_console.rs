use crate::device_display::interface::{DeviceDisplay, Tone};
use std::error::Error;
use std::io::Write;

const WIDTH: usize = 60;

/// Draws each presented outcome as one box on a terminal.
///
/// The box is open on the right: emoji labels have no fixed column width,
/// so a right border could not be kept aligned.
pub struct DeviceDisplayConsole {
    lines: Vec<(Tone, String)>,
    out: Box<dyn Write + Send + Sync>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send + Sync>) -> Self {
        Self {
            lines: Vec::new(),
            out,
        }
    }

    fn frame(&self) -> String {
        let rule = "─".repeat(WIDTH);
        let mut out = format!("┌{}\n", rule);
        for (tone, text) in &self.lines {
            out.push_str(&format!("│ {:<5} {}\n", tone.tag(), text));
        }
        out.push_str(&format!("└{}\n", rule));
        out
    }
}

impl Default for DeviceDisplayConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines.clear();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines.clear();
        Ok(())
    }

    fn write_line(&mut self, tone: Tone, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines.push((tone, text.to_string()));
        Ok(())
    }

    fn present(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.lines.is_empty() {
            return Ok(());
        }
        let frame = self.frame();
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture_classifier::decide::decide;
    use crate::gesture_classifier::gesture::ProbabilityVector;
    use crate::render::Render;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn console() -> (DeviceDisplayConsole, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (DeviceDisplayConsole::with_writer(Box::new(buffer.clone())), buffer)
    }

    #[test]
    fn test_nothing_printed_until_present() {
        let (mut display, buffer) = console();
        display.init().unwrap();
        display.write_line(Tone::Success, "Thumbs up").unwrap();
        display.write_line(Tone::Warning, "Try again").unwrap();
        assert!(buffer.text().is_empty());

        display.present().unwrap();

        let text = buffer.text();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[1].contains("OK") && rows[1].contains("Thumbs up"));
        assert!(rows[2].contains("WARN") && rows[2].contains("Try again"));
    }

    #[test]
    fn test_one_frame_per_render() {
        let (display, buffer) = console();
        let render = Render::new(Arc::new(Mutex::new(display)));
        let probabilities = ProbabilityVector::try_from(vec![0.6, 0.7, 0.8]).unwrap();

        render.render(&Ok(decide(&probabilities, 0.5))).unwrap();

        let text = buffer.text();
        assert_eq!(text.matches('┌').count(), 1);
        assert_eq!(text.matches('└').count(), 1);
        // header plus three gestures
        assert_eq!(text.lines().filter(|l| l.starts_with('│')).count(), 4);

        render.render(&Ok(decide(&probabilities, 0.9))).unwrap();
        assert_eq!(buffer.text().matches('┌').count(), 2);
    }

    #[test]
    fn test_emoji_lines_have_no_right_border() {
        let (mut display, buffer) = console();
        display.write_line(Tone::Info, "✌️ Peace, probability: 80.00%").unwrap();
        display.present().unwrap();

        let text = buffer.text();
        let row = text.lines().nth(1).unwrap();
        assert!(row.ends_with("80.00%"));
    }

    #[test]
    fn test_clear_drops_lines() {
        let (mut display, buffer) = console();
        display.write_line(Tone::Info, "hello").unwrap();
        display.clear().unwrap();
        display.present().unwrap();
        assert!(buffer.text().is_empty());
    }
}
