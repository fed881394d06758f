//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global effect configuration.
///
/// Every field is independently defaulted, so a partial config file
/// (or none at all) yields a working setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Whether to play the sound effect when the sequence triggers.
    pub sound: bool,

    /// Playback volume in [0.0, 1.0]. Out-of-range values are clamped.
    pub volume: f64,

    /// Image display size in pixels; also the slide distance.
    pub image_size: u32,

    /// Optional image asset reference (path or URL).
    pub image_src: Option<String>,

    /// Trigger key-code sequence, in order.
    pub key_codes: Vec<u32>,

    /// Slide-in tween duration (ms).
    pub slide_in_ms: u64,

    /// Slide-out tween duration (ms).
    pub slide_out_ms: u64,

    /// Hold delay between slide-in completion and slide-out start (ms).
    pub hold_ms: u64,

    /// Easing curve name. Unknown names fall back to linear.
    pub easing: String,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "toasty=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            sound: true,
            volume: 0.5,
            image_size: 150,
            image_src: None,
            // up, up, down, down, left, right, left, right, b, a
            key_codes: vec![38, 38, 40, 40, 37, 39, 37, 39, 66, 65],
            slide_in_ms: 360,
            slide_out_ms: 360,
            hold_ms: 600,
            easing: "easeinout".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl EffectConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }

    /// Volume clamped to the valid [0.0, 1.0] range.
    pub fn clamped_volume(&self) -> f64 {
        self.volume.clamp(0.0, 1.0)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("toasty").join("config.json")
}
