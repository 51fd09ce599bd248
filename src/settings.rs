//! Driver settings
//!
//! Loaded from a JSON file next to the binary. A missing or malformed file is
//! never fatal: defaults are used and the problem is logged.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Default settings file name
pub const SETTINGS_FILE: &str = "meteor_shooter_settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    /// Canvas width in device pixels
    pub canvas_width: f32,
    /// Canvas height in device pixels
    pub canvas_height: f32,

    // === Run ===
    /// RNG seed (random per run when absent)
    pub seed: Option<u64>,
    /// Number of frames the headless driver simulates
    pub frames: u32,
    /// Simulated display refresh rate
    pub frame_rate: f64,

    // === HUD ===
    /// Log the FPS counter once per second
    pub show_fps: bool,

    /// Gameplay balance overrides
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: 1280.0,
            canvas_height: 720.0,

            seed: None,
            frames: 60 * 30,
            frame_rate: 60.0,

            show_fps: cfg!(debug_assertions),

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Canvas dimensions as a vector
    pub fn canvas_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.canvas_width, self.canvas_height)
    }

    /// Load settings from disk, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
