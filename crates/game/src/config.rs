//! Game configuration (controls, flight, fleet, rules, audio). Loaded from config.ron at startup.

use std::path::{Path, PathBuf};

use audio::AudioConfig;
use input::ControlConfig;
use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::fleet::FleetConfig;
use crate::flight::FlightConfig;
use crate::state::RulesConfig;
use crate::ufo::UfoConfig;

/// Settings for the headless scripted run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Simulated seconds to run.
    pub duration_secs: f32,
    /// Synthetic frame rate of the scheduler.
    pub frame_rate: f32,
    /// Sleep between frames so the run takes wall-clock time (useful with audio).
    pub realtime: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            duration_secs: 60.0,
            frame_rate: 60.0,
            realtime: false,
        }
    }
}

/// Every tunable in the game. Sections missing from the file take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub controls: ControlConfig,
    #[serde(default)]
    pub flight: FlightConfig,
    #[serde(default)]
    pub ufo: UfoConfig,
    #[serde(default)]
    pub fleet: FleetConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => match Self::from_ron(&data) {
                Ok(c) => {
                    log::info!("Loaded config from {:?}", path);
                    return c;
                }
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            },
            Err(_) => log::info!("No config at {:?}, using defaults", path),
        }
        Self::default()
    }

    pub fn from_ron(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("config.ron")
}
