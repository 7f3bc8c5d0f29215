//! Arcade flight model: control axes in, orientation and position out.
//!
//! Purely kinematic. Pitch and roll are integrated from the axes and clamped,
//! yaw comes only from bank-to-turn coupling, and the plane moves along its
//! nose at a speed set directly by the throttle. No lift, drag or gravity;
//! collision handling belongs to the game loop.

use engine_core::Transform;
use glam::{Quat, Vec3};
use input::ControlAxes;
use serde::{Deserialize, Serialize};

/// Angles this close to zero snap to exactly zero while auto-levelling.
const SETTLE_EPSILON: f32 = 0.01;
/// Roll input below this magnitude counts as "hands off" for auto-level.
const ROLL_DEADZONE: f32 = 0.1;
/// Propeller turn per tick at the reference speed.
const PROPELLER_STEP: f32 = 0.3;
const PROPELLER_REFERENCE_SPEED: f32 = 30.0;

/// Tuning for [`FlightModel`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Speed at the throttle floor end of the range (units/second).
    pub min_speed: f32,
    /// Speed at full throttle (units/second).
    pub max_speed: f32,
    /// Pitch limit in degrees.
    pub max_pitch_deg: f32,
    /// Bank limit in degrees.
    pub max_bank_deg: f32,
    /// Radians per second of pitch at full pitch input.
    pub pitch_rate: f32,
    /// Radians per second of roll at full roll input.
    pub roll_rate: f32,
    /// Yaw rate per radian of bank.
    pub yaw_coupling: f32,
    /// Radians per second the bank returns to level with roll input released.
    pub auto_level_strength: f32,
    /// Radians per second the pitch returns to level with pitch input released.
    pub auto_center_rate: f32,
    /// Starting position, behind and above the city.
    pub spawn_position: Vec3,
    /// Starting pitch in radians (positive lowers the nose).
    pub spawn_pitch: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            min_speed: 10.0,
            max_speed: 50.0,
            max_pitch_deg: 60.0,
            max_bank_deg: 45.0,
            pitch_rate: 0.8,
            roll_rate: 2.0,
            yaw_coupling: 1.5,
            auto_level_strength: 0.5,
            auto_center_rate: 0.5,
            spawn_position: Vec3::new(0.0, 100.0, -200.0),
            spawn_pitch: 0.1,
        }
    }
}

impl FlightConfig {
    pub fn max_pitch(&self) -> f32 {
        self.max_pitch_deg.to_radians()
    }

    pub fn max_bank(&self) -> f32 {
        self.max_bank_deg.to_radians()
    }

    /// Speed for a normalized throttle value.
    pub fn speed_for_throttle(&self, throttle: f32) -> f32 {
        self.min_speed + throttle.clamp(0.0, 1.0) * (self.max_speed - self.min_speed)
    }
}

/// Speed readout for the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedInfo {
    pub current: f32,
    pub min: f32,
    pub max: f32,
}

/// Plane attitude, position and speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub orientation: Quat,
    pub pitch_angle: f32,
    pub roll_angle: f32,
    pub yaw_angle: f32,
    pub position: Vec3,
    pub speed: f32,
}

/// The player's plane.
#[derive(Debug, Clone)]
pub struct FlightModel {
    config: FlightConfig,
    initial_throttle: f32,
    state: FlightState,
    propeller_angle: f32,
}

impl FlightModel {
    /// Create a plane at the spawn point, flying at `initial_throttle`.
    pub fn new(config: FlightConfig, initial_throttle: f32) -> Self {
        let state = Self::spawn_state(&config, initial_throttle);
        Self {
            config,
            initial_throttle,
            state,
            propeller_angle: 0.0,
        }
    }

    fn spawn_state(config: &FlightConfig, initial_throttle: f32) -> FlightState {
        let pitch = config.spawn_pitch.clamp(-config.max_pitch(), config.max_pitch());
        FlightState {
            orientation: compose_orientation(0.0, pitch, 0.0),
            pitch_angle: pitch,
            roll_angle: 0.0,
            yaw_angle: 0.0,
            position: config.spawn_position,
            speed: config.speed_for_throttle(initial_throttle),
        }
    }

    /// Put the plane back at the spawn point with starting attitude and speed.
    pub fn reset(&mut self) {
        self.state = Self::spawn_state(&self.config, self.initial_throttle);
        self.propeller_angle = 0.0;
    }

    /// Advance one tick.
    pub fn update(&mut self, axes: &ControlAxes, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let cfg = &self.config;
        let s = &mut self.state;

        s.speed = cfg.speed_for_throttle(axes.throttle);

        let max_pitch = cfg.max_pitch();
        s.pitch_angle = (s.pitch_angle + axes.pitch * dt * cfg.pitch_rate).clamp(-max_pitch, max_pitch);
        if axes.pitch == 0.0 {
            s.pitch_angle = settle_toward_zero(s.pitch_angle, cfg.auto_center_rate * dt);
        }

        let max_bank = cfg.max_bank();
        s.roll_angle = (s.roll_angle + axes.roll * dt * cfg.roll_rate).clamp(-max_bank, max_bank);
        if axes.roll.abs() < ROLL_DEADZONE {
            s.roll_angle = settle_toward_zero(s.roll_angle, cfg.auto_level_strength * dt);
        }

        // Bank-to-turn: negative roll yaws positive (left bank, left turn).
        s.yaw_angle += -s.roll_angle * dt * cfg.yaw_coupling;

        s.orientation = compose_orientation(s.yaw_angle, s.pitch_angle, s.roll_angle);
        s.position += s.orientation * Vec3::Z * s.speed * dt;

        self.propeller_angle = (self.propeller_angle
            + PROPELLER_STEP * (s.speed / PROPELLER_REFERENCE_SPEED))
            % std::f32::consts::TAU;
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn orientation(&self) -> Quat {
        self.state.orientation
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    /// (pitch, roll, yaw) in radians.
    pub fn angles(&self) -> (f32, f32, f32) {
        (self.state.pitch_angle, self.state.roll_angle, self.state.yaw_angle)
    }

    pub fn speed_info(&self) -> SpeedInfo {
        SpeedInfo {
            current: self.state.speed,
            min: self.config.min_speed,
            max: self.config.max_speed,
        }
    }

    pub fn propeller_angle(&self) -> f32 {
        self.propeller_angle
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.state.position, self.state.orientation)
    }
}

/// Orientation from absolute angles, composed yaw * pitch * roll (roll applied first).
pub fn compose_orientation(yaw: f32, pitch: f32, roll: f32) -> Quat {
    let q_yaw = Quat::from_axis_angle(Vec3::Y, yaw);
    let q_pitch = Quat::from_axis_angle(Vec3::X, pitch);
    let q_roll = Quat::from_axis_angle(Vec3::Z, roll);
    (q_yaw * q_pitch * q_roll).normalize()
}

/// Step `angle` toward zero by `step` without passing it.
fn settle_toward_zero(angle: f32, step: f32) -> f32 {
    if angle.abs() <= SETTLE_EPSILON || step >= angle.abs() {
        0.0
    } else {
        angle - angle.signum() * step
    }
}
