//! Chase camera with a free-orbit alternative, toggled from the keyboard.

use std::fmt;

use engine_core::Transform;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Trails the plane, smoothed.
    #[default]
    Follow,
    /// Looks at a point pinned where the plane was when the mode was entered.
    Orbit,
}

impl CameraMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CameraMode::Follow => "follow",
            CameraMode::Orbit => "orbit",
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye offset in the plane's local frame (behind and above).
    pub follow_offset: Vec3,
    /// Look target offset in the plane's local frame (slightly ahead).
    pub look_ahead: Vec3,
    /// Fraction of the remaining distance the eye covers each tick.
    pub follow_lerp: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow_offset: Vec3::new(0.0, 2.0, -6.0),
            look_ahead: Vec3::new(0.0, 0.0, 2.0),
            follow_lerp: 0.05,
        }
    }
}

/// Where the renderer should place its camera this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraView {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }
}

#[derive(Debug, Clone)]
pub struct CameraRig {
    config: CameraConfig,
    mode: CameraMode,
    eye: Vec3,
    target: Vec3,
}

impl CameraRig {
    /// Start in follow mode, eye already in place behind `plane`.
    pub fn new(config: CameraConfig, plane: &Transform) -> Self {
        let mut rig = Self {
            config,
            mode: CameraMode::Follow,
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
        };
        rig.reset(plane);
        rig
    }

    pub fn reset(&mut self, plane: &Transform) {
        self.mode = CameraMode::Follow;
        self.eye = plane.local_to_world(self.config.follow_offset);
        self.target = plane.local_to_world(self.config.look_ahead);
    }

    /// Switch mode and return the new one.
    pub fn toggle(&mut self, plane: &Transform) -> CameraMode {
        self.mode = match self.mode {
            CameraMode::Follow => {
                self.target = plane.position;
                CameraMode::Orbit
            }
            CameraMode::Orbit => CameraMode::Follow,
        };
        self.mode
    }

    pub fn update(&mut self, plane: &Transform) {
        if self.mode == CameraMode::Follow {
            let desired = plane.local_to_world(self.config.follow_offset);
            self.eye = self.eye.lerp(desired, self.config.follow_lerp.clamp(0.0, 1.0));
            self.target = plane.local_to_world(self.config.look_ahead);
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn view(&self) -> CameraView {
        CameraView { eye: self.eye, target: self.target }
    }
}
