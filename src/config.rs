use crate::gesture_classifier::decide::DEFAULT_THRESHOLD;
use crate::model_provider::model_config::ModelConfig;
use chrono::Offset;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub classification_threshold: f32,
    pub model_config: ModelConfig,
    pub capture_count: usize,
    pub capture_interval: Duration,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classification_threshold: DEFAULT_THRESHOLD,
            model_config: ModelConfig::default(),
            capture_count: 1,
            capture_interval: Duration::from_secs(1),
            logger_timezone: utc(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if !(0.0..=1.0).contains(&self.classification_threshold) {
            return Err(format!(
                "classification threshold {} must be within [0, 1]",
                self.classification_threshold
            )
            .into());
        }
        if self.capture_count == 0 {
            return Err("capture count must be at least 1".into());
        }
        Ok(())
    }
}

pub fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}

pub fn utc_offset_hours(hours: i32) -> Option<chrono::FixedOffset> {
    chrono::FixedOffset::east_opt(hours * 3600)
}
