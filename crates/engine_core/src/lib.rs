//! Shared engine pieces for Skyraid: object placement and the frame clock
//! that turns scheduler timestamps into simulation deltas.

pub mod time;
pub mod transform;

pub use time::{FrameClock, DEFAULT_MAX_DELTA};
pub use transform::{Transform, TransformRaw};

pub use glam::{Mat4, Quat, Vec3};
