//! UI collaborator boundary and the speed gauge readout.

use crate::camera::CameraMode;
use crate::flight::SpeedInfo;
use crate::state::{GameError, Screen};

/// What the game loop tells the UI. Each call is made only when the value changed.
pub trait UiSink {
    fn update_speed(&mut self, speed: SpeedInfo);

    fn update_camera_mode(&mut self, mode: CameraMode);

    fn update_mute_status(&mut self, muted: bool);

    /// Show the screen for the current phase, hiding the others.
    fn show_screen(&mut self, screen: Screen) -> Result<(), GameError>;
}

/// Colour band of the speed bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedBand {
    Low,
    Medium,
    High,
}

impl SpeedBand {
    /// Bar colour as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            SpeedBand::Low => "#4CAF50",
            SpeedBand::Medium => "#FFC107",
            SpeedBand::High => "#F44336",
        }
    }
}

/// Speed bar fill and colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedGauge {
    /// Position within the speed range, 0 to 100.
    pub percentage: f32,
    pub band: SpeedBand,
}

impl SpeedGauge {
    pub fn from_speed(speed: SpeedInfo) -> Self {
        let range = speed.max - speed.min;
        let percentage = if range > 0.0 {
            ((speed.current - speed.min) / range * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        let band = if percentage < 33.0 {
            SpeedBand::Low
        } else if percentage < 66.0 {
            SpeedBand::Medium
        } else {
            SpeedBand::High
        };
        Self { percentage, band }
    }

    /// Readout text, e.g. "34 units".
    pub fn label(speed: SpeedInfo) -> String {
        format!("{} units", speed.current.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed(current: f32) -> SpeedInfo {
        SpeedInfo { current, min: 10.0, max: 50.0 }
    }

    #[test]
    fn bands_follow_thirds() {
        assert_eq!(SpeedGauge::from_speed(speed(10.0)).band, SpeedBand::Low);
        assert_eq!(SpeedGauge::from_speed(speed(34.0)).band, SpeedBand::Medium);
        assert_eq!(SpeedGauge::from_speed(speed(50.0)).band, SpeedBand::High);
        assert!((SpeedGauge::from_speed(speed(34.0)).percentage - 60.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_range_reads_empty() {
        let gauge = SpeedGauge::from_speed(SpeedInfo { current: 5.0, min: 5.0, max: 5.0 });
        assert_eq!(gauge.percentage, 0.0);
        assert_eq!(SpeedGauge::label(speed(33.6)), "34 units");
    }
}
