use std::error::Error;

/// How a line should stand out. Mirrors the banner kinds of the capture page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Info,
    Warning,
}

impl Tone {
    pub fn tag(&self) -> &'static str {
        match self {
            Tone::Success => "OK",
            Tone::Error => "ERR",
            Tone::Info => "INFO",
            Tone::Warning => "WARN",
        }
    }
}

/// Something that can show the outcome of a capture to a person.
pub trait DeviceDisplay: Send + Sync {
    /// Bring the display up. Called once before the first capture.
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Remove everything written since the last clear.
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Queue one line below the ones already written.
    fn write_line(&mut self, tone: Tone, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show everything written since the last clear, as one unit.
    fn present(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;
}
