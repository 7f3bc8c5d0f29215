//! Keyboard input handling and flight-control sampling.

use std::collections::HashSet;

pub mod controls;

pub use controls::{ControlAxes, ControlConfig, ControlSampler, EdgeTrigger};

/// Manages keyboard state for the current frame.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,
    /// Keys released this frame.
    keys_released: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                if self.keys_held.remove(&key) {
                    self.keys_released.insert(key);
                }
            }
        }
    }

    /// Release every held key (focus loss).
    pub fn release_all(&mut self) {
        for key in self.keys_held.drain() {
            self.keys_released.insert(key);
        }
    }

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was released this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Pitch keys: +1 for nose-down (Up arrow), -1 for nose-up (Down arrow), 0 otherwise.
    /// Up wins when both are held.
    pub fn pitch_direction(&self) -> f32 {
        if self.is_key_held(KeyCode::ArrowUp) {
            1.0
        } else if self.is_key_held(KeyCode::ArrowDown) {
            -1.0
        } else {
            0.0
        }
    }

    /// Roll keys: +1 for Left arrow, -1 for Right arrow, 0 otherwise. Left wins when both are held.
    pub fn roll_direction(&self) -> f32 {
        if self.is_key_held(KeyCode::ArrowLeft) {
            1.0
        } else if self.is_key_held(KeyCode::ArrowRight) {
            -1.0
        } else {
            0.0
        }
    }

    /// Throttle keys: +1 for PageUp, -1 for PageDown, 0 otherwise.
    pub fn throttle_direction(&self) -> f32 {
        if self.is_key_held(KeyCode::PageUp) {
            1.0
        } else if self.is_key_held(KeyCode::PageDown) {
            -1.0
        } else {
            0.0
        }
    }

    /// Camera toggle key (C) held.
    pub fn is_camera_toggle_held(&self) -> bool {
        self.is_key_held(KeyCode::KeyC)
    }

    /// Mute toggle key (M) held.
    pub fn is_mute_toggle_held(&self) -> bool {
        self.is_key_held(KeyCode::KeyM)
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
