//! A single UFO: hover drift, lateral patrol with wrap-around, spin and a pulsing beam light.

use engine_core::Transform;
use glam::{Quat, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Tuning shared by every UFO in the fleet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct UfoConfig {
    pub hover_amplitude: f32,
    pub hover_frequency: f32,
    /// Spin about the vertical axis, radians per second.
    pub spin_rate: f32,
    /// Slowest patrol speed; each UFO adds a random share of `speed_spread`.
    pub min_horizontal_speed: f32,
    pub speed_spread: f32,
    /// Patrol runs between `-patrol_boundary` and `+patrol_boundary` on X.
    pub patrol_boundary: f32,
    /// Upper bound of the random starting phase, in seconds.
    pub max_time_phase: f32,
    pub beam_base: f32,
    pub beam_amplitude: f32,
    pub beam_frequency: f32,
}

impl Default for UfoConfig {
    fn default() -> Self {
        Self {
            hover_amplitude: 0.5,
            hover_frequency: 0.5,
            spin_rate: 0.3,
            min_horizontal_speed: 10.0,
            speed_spread: 5.0,
            patrol_boundary: 120.0,
            max_time_phase: 1000.0,
            beam_base: 3.0,
            beam_amplitude: 2.0,
            beam_frequency: 2.0,
        }
    }
}

/// One UFO's motion state.
#[derive(Debug, Clone)]
pub struct UfoAgent {
    config: UfoConfig,
    position: Vec3,
    /// Running clock driving hover and beam; starts at a random phase.
    time: f32,
    horizontal_speed: f32,
    moving_right: bool,
    spin_angle: f32,
    beam_intensity: f32,
}

impl UfoAgent {
    /// Create a UFO at `position`, drawing its speed and phase from its own seeded stream.
    pub fn new(config: UfoConfig, position: Vec3, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let horizontal_speed = config.min_horizontal_speed + rng.gen::<f32>() * config.speed_spread;
        let time = rng.gen::<f32>() * config.max_time_phase;
        Self {
            config,
            position,
            time,
            horizontal_speed,
            moving_right: true,
            spin_angle: 0.0,
            beam_intensity: beam_intensity(&config, time),
        }
    }

    /// Patrol toward −X instead (wrapping from the left boundary to the right).
    pub fn moving_left(mut self) -> Self {
        self.moving_right = false;
        self
    }

    pub fn update(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let cfg = &self.config;
        self.time += dt;

        // The sine term is a vertical velocity, so the UFO drifts rather than bobbing in place.
        let hover = (self.time * cfg.hover_frequency).sin() * cfg.hover_amplitude;
        self.position.y += hover * dt;

        let bound = cfg.patrol_boundary;
        if self.moving_right {
            self.position.x += self.horizontal_speed * dt;
            if self.position.x > bound {
                self.position.x = -bound;
            }
        } else {
            self.position.x -= self.horizontal_speed * dt;
            if self.position.x < -bound {
                self.position.x = bound;
            }
        }

        self.spin_angle = (self.spin_angle + cfg.spin_rate * dt) % std::f32::consts::TAU;
        self.beam_intensity = beam_intensity(cfg, self.time);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn hover_phase(&self) -> f32 {
        self.time
    }

    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_speed
    }

    pub fn is_moving_right(&self) -> bool {
        self.moving_right
    }

    pub fn spin_angle(&self) -> f32 {
        self.spin_angle
    }

    /// Beam point-light intensity for the renderer.
    pub fn beam_intensity(&self) -> f32 {
        self.beam_intensity
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.position, Quat::from_rotation_y(self.spin_angle))
    }
}

fn beam_intensity(cfg: &UfoConfig, time: f32) -> f32 {
    cfg.beam_base + (time * cfg.beam_frequency).sin() * cfg.beam_amplitude
}
