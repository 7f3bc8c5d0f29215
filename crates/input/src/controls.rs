//! Turns the held-key map into normalized flight-control axes.
//!
//! Axes are accumulated over time rather than snapped: holding a key ramps
//! its axis toward the limit, releasing it lets the axis drift back.

use serde::{Deserialize, Serialize};

use crate::InputState;

/// Control axes produced fresh every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlAxes {
    /// Pitch demand in [-1, 1].
    pub pitch: f32,
    /// Roll demand in [-1, 1].
    pub roll: f32,
    /// Throttle in [floor, 1].
    pub throttle: f32,
    /// Camera key went down this tick.
    pub camera_toggle_edge: bool,
    /// Mute key went down this tick.
    pub mute_toggle_edge: bool,
}

/// Sensitivities and limits for [`ControlSampler`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Pitch axis change per second while a pitch key is held.
    #[serde(default = "default_pitch_sensitivity")]
    pub pitch_sensitivity: f32,
    /// Roll axis change per second while a roll key is held.
    #[serde(default = "default_roll_sensitivity")]
    pub roll_sensitivity: f32,
    /// Throttle change per second while PageUp/PageDown is held.
    #[serde(default = "default_throttle_sensitivity")]
    pub throttle_sensitivity: f32,
    /// Rate at which released pitch/roll axes return to zero.
    #[serde(default = "default_auto_center_speed")]
    pub auto_center_speed: f32,
    /// Throttle at start and after every restart.
    #[serde(default = "default_initial_throttle")]
    pub initial_throttle: f32,
    /// Lowest throttle the sampler will ever produce.
    #[serde(default = "default_throttle_floor")]
    pub throttle_floor: f32,
    /// Decay toward the floor per second while no throttle key is held (0 holds the setting).
    #[serde(default)]
    pub throttle_release_decay: f32,
}

fn default_pitch_sensitivity() -> f32 {
    0.8
}
fn default_roll_sensitivity() -> f32 {
    2.0
}
fn default_throttle_sensitivity() -> f32 {
    0.5
}
fn default_auto_center_speed() -> f32 {
    0.5
}
fn default_initial_throttle() -> f32 {
    0.6
}
fn default_throttle_floor() -> f32 {
    0.2
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            pitch_sensitivity: default_pitch_sensitivity(),
            roll_sensitivity: default_roll_sensitivity(),
            throttle_sensitivity: default_throttle_sensitivity(),
            auto_center_speed: default_auto_center_speed(),
            initial_throttle: default_initial_throttle(),
            throttle_floor: default_throttle_floor(),
            throttle_release_decay: 0.0,
        }
    }
}

/// Reports a key's false-to-true transitions by remembering last tick's state.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    previous: bool,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current held state; true only on the tick the key goes down.
    pub fn update(&mut self, held: bool) -> bool {
        let fired = held && !self.previous;
        self.previous = held;
        fired
    }

    /// Held state seen on the last update.
    pub fn previous(&self) -> bool {
        self.previous
    }
}

/// The input sampler: owns accumulated axes and toggle history.
#[derive(Debug, Clone)]
pub struct ControlSampler {
    config: ControlConfig,
    pitch: f32,
    roll: f32,
    throttle: f32,
    camera_toggle: EdgeTrigger,
    mute_toggle: EdgeTrigger,
}

impl Default for ControlSampler {
    fn default() -> Self {
        Self::new(ControlConfig::default())
    }
}

impl ControlSampler {
    pub fn new(config: ControlConfig) -> Self {
        let throttle = config.initial_throttle.clamp(config.throttle_floor, 1.0);
        Self {
            config,
            pitch: 0.0,
            roll: 0.0,
            throttle,
            camera_toggle: EdgeTrigger::new(),
            mute_toggle: EdgeTrigger::new(),
        }
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Sample the keyboard once for this tick.
    pub fn sample(&mut self, input: &InputState, dt: f32) -> ControlAxes {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let cfg = &self.config;

        self.pitch = ramp_axis(
            self.pitch,
            input.pitch_direction(),
            cfg.pitch_sensitivity * dt,
            cfg.auto_center_speed * dt,
        );
        self.roll = ramp_axis(
            self.roll,
            input.roll_direction(),
            cfg.roll_sensitivity * dt,
            cfg.auto_center_speed * dt,
        );

        let floor = cfg.throttle_floor;
        let throttle_dir = input.throttle_direction();
        self.throttle = if throttle_dir > 0.0 {
            (self.throttle + cfg.throttle_sensitivity * dt).min(1.0)
        } else if throttle_dir < 0.0 {
            (self.throttle - cfg.throttle_sensitivity * dt).max(floor)
        } else {
            (self.throttle - cfg.throttle_release_decay * dt).max(floor)
        };

        let camera_toggle_edge = self.camera_toggle.update(input.is_camera_toggle_held());
        let mute_toggle_edge = self.mute_toggle.update(input.is_mute_toggle_held());
        if camera_toggle_edge || mute_toggle_edge {
            log::trace!("toggle edge: camera={camera_toggle_edge} mute={mute_toggle_edge}");
        }

        ControlAxes {
            pitch: self.pitch,
            roll: self.roll,
            throttle: self.throttle,
            camera_toggle_edge,
            mute_toggle_edge,
        }
    }

    /// Restore starting axes. Toggle history is kept so a held key cannot re-fire.
    pub fn reset(&mut self) {
        self.pitch = 0.0;
        self.roll = 0.0;
        self.throttle = self.config.initial_throttle.clamp(self.config.throttle_floor, 1.0);
    }

    pub fn throttle(&self) -> f32 {
        self.throttle
    }
}

/// Move `value` toward ±1 while a key is held, otherwise back toward zero without crossing it.
fn ramp_axis(value: f32, direction: f32, step: f32, center_step: f32) -> f32 {
    if direction > 0.0 {
        (value + step).min(1.0)
    } else if direction < 0.0 {
        (value - step).max(-1.0)
    } else if value > 0.0 {
        (value - center_step).max(0.0)
    } else if value < 0.0 {
        (value + center_step).min(0.0)
    } else {
        0.0
    }
}
