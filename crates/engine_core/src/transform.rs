//! Rigid placement of vehicles and the instance data handed to a renderer.
//!
//! Vehicles fly nose-first along their local +Z axis.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

/// Position, rotation and scale of one object in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl Transform {
    /// Unit-scale transform placed at `position` with `rotation`.
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation, scale: Vec3::ONE }
    }

    /// Unrotated transform at `position`.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Nose direction.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Map a point from local space into world space. Scale is ignored, so
    /// offsets such as camera mounts stay in world units.
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }
}

/// Column-major model matrix, one per drawn instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct TransformRaw {
    pub model: [[f32; 4]; 4],
}

impl From<&Transform> for TransformRaw {
    fn from(t: &Transform) -> Self {
        Self { model: t.model_matrix().to_cols_array_2d() }
    }
}

impl From<Transform> for TransformRaw {
    fn from(t: Transform) -> Self {
        (&t).into()
    }
}
