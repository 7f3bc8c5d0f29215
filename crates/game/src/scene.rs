//! Per-frame snapshot handed to the renderer collaborator.

use engine_core::{Transform, TransformRaw};

use crate::camera::CameraView;

/// Visual state of one UFO.
#[derive(Debug, Clone, Copy)]
pub struct UfoVisual {
    pub transform: Transform,
    /// Point-light intensity under the saucer.
    pub beam_intensity: f32,
}

/// Everything a renderer needs to draw the current frame.
#[derive(Debug, Clone)]
pub struct SceneFrame {
    pub plane: Transform,
    pub propeller_angle: f32,
    pub ufos: Vec<UfoVisual>,
    pub camera: CameraView,
}

impl SceneFrame {
    /// Instance matrices, plane first then UFOs in slot order.
    pub fn instances(&self) -> Vec<TransformRaw> {
        std::iter::once(&self.plane)
            .chain(self.ufos.iter().map(|ufo| &ufo.transform))
            .map(TransformRaw::from)
            .collect()
    }
}

/// The renderer collaborator. Fire-and-forget: nothing flows back.
pub trait SceneSink {
    fn present(&mut self, frame: &SceneFrame);
}

/// Drops every frame.
#[derive(Debug, Default)]
pub struct NullScene;

impl SceneSink for NullScene {
    fn present(&mut self, _frame: &SceneFrame) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn instances_list_plane_then_ufos() {
        let frame = SceneFrame {
            plane: Transform::at(Vec3::new(1.0, 2.0, 3.0)),
            propeller_angle: 0.0,
            ufos: vec![UfoVisual {
                transform: Transform::at(Vec3::new(4.0, 5.0, 6.0)),
                beam_intensity: 3.0,
            }],
            camera: CameraView { eye: Vec3::ZERO, target: Vec3::Z },
        };
        let instances = frame.instances();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(instances[1].model[3], [4.0, 5.0, 6.0, 1.0]);
    }
}
