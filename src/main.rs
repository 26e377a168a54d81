use app::App;
use clap::{Parser, ValueEnum};
use config::{utc_offset_hours, Config};
use device_camera::impl_fake::DeviceCameraFake;
use device_camera::impl_file::DeviceCameraFile;
use device_camera::interface::DeviceCamera;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use gesture_classifier::classify::GestureClassifier;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use model_provider::impl_fake::ModelProviderFake;
use model_provider::impl_tract_onnx::ModelProviderTractOnnx;
use model_provider::interface::ModelProvider;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

mod app;
mod config;
mod device_camera;
mod device_display;
mod gesture_classifier;
mod library;
mod model_provider;
mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DisplayKind {
    Console,
    Gui,
}

#[derive(Parser, Debug)]
#[command(name = "gesture-recognizer")]
#[command(version, about = "Recognize thumbs up, thumbs down and peace signs in photos")]
struct Cli {
    /// ONNX model exported from the trained classifier
    #[arg(long, value_name = "PATH", default_value = "keras_model.onnx")]
    model: PathBuf,

    /// Use a random stand-in model instead of loading one
    #[arg(long)]
    fake_model: bool,

    /// Photo to classify; repeat to cycle through several. Without it a synthetic camera is used
    #[arg(long = "image", value_name = "PATH")]
    images: Vec<PathBuf>,

    /// Probability a gesture must exceed to count as recognized
    #[arg(long, default_value_t = 0.5)]
    threshold: f32,

    /// Number of photos to capture
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Pause between captures in milliseconds
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Where results are shown
    #[arg(long, value_enum, default_value_t = DisplayKind::Console)]
    display: DisplayKind,

    /// Timezone of log timestamps, as hours east of UTC
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    utc_offset_hours: i32,
}

impl Cli {
    fn config(&self) -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
        let mut config = Config::default();
        config.classification_threshold = self.threshold;
        config.model_config.onnx_model_path = self.model.clone();
        config.capture_count = self.count;
        config.capture_interval = Duration::from_millis(self.interval_ms);
        config.logger_timezone = utc_offset_hours(self.utc_offset_hours)
            .ok_or_else(|| format!("invalid UTC offset: {} hours", self.utc_offset_hours))?;
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let config = cli.config()?;

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let model_provider: Arc<dyn ModelProvider + Send + Sync> = if cli.fake_model {
        logger.warn("Using a random stand-in model, results are meaningless")?;
        Arc::new(ModelProviderFake::new())
    } else {
        match ModelProviderTractOnnx::new(config.model_config.clone(), logger.clone()) {
            Ok(model_provider) => Arc::new(model_provider),
            Err(err) => {
                logger.error(&format!(
                    "Failed to load {}: {}",
                    config.model_config.onnx_model_path.display(),
                    err
                ))?;
                logger.error("Make sure the model file is next to the binary or pass --model")?;
                return Err(err);
            }
        }
    };

    let device_camera: Arc<dyn DeviceCamera + Send + Sync> = if cli.images.is_empty() {
        Arc::new(DeviceCameraFake::new(logger.clone()))
    } else {
        Arc::new(DeviceCameraFile::new(logger.clone(), cli.images.clone())?)
    };

    let gui = DeviceDisplayGui::new();
    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> = match cli.display {
        DisplayKind::Console => Arc::new(Mutex::new(DeviceDisplayConsole::new())),
        DisplayKind::Gui => Arc::new(Mutex::new(gui.clone())),
    };

    let gesture_classifier =
        GestureClassifier::new(model_provider).with_threshold(config.classification_threshold);

    let app = App::new(
        config,
        logger,
        device_camera,
        device_display,
        gesture_classifier,
    );

    match cli.display {
        DisplayKind::Console => app.start(),
        DisplayKind::Gui => run_with_window(app, &gui),
    }
}

/// The window owns the main thread; captures run beside it. Returns once the
/// window is closed, or immediately if it cannot be opened.
fn run_with_window(
    app: App,
    gui: &DeviceDisplayGui,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let captures = std::thread::spawn(move || app.start());

    gui.run_window()?;

    if captures.is_finished() {
        return captures
            .join()
            .map_err(|_| "capture thread panicked")?;
    }

    Ok(())
}
