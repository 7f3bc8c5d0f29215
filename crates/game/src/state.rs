//! Game state types: phases, screens, loss causes and the rules that drive transitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced at the collaborator boundary. Reported, never fatal.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown screen `{0}`")]
    UnknownScreen(String),
    #[error("screen `{0}` could not be shown: {1}")]
    ScreenUnavailable(Screen, String),
}

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Start,
    Playing,
    Victory,
    Lose,
}

impl GamePhase {
    /// The UI screen that represents this phase.
    pub fn screen(self) -> Screen {
        match self {
            GamePhase::Start => Screen::Start,
            GamePhase::Playing => Screen::Playing,
            GamePhase::Victory => Screen::Victory,
            GamePhase::Lose => Screen::Lose,
        }
    }

    /// Whether a restart request applies in this phase.
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::Lose)
    }
}

/// State screen selector sent to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Start,
    Playing,
    Victory,
    Lose,
}

impl Screen {
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Start => "start",
            Screen::Playing => "playing",
            Screen::Victory => "victory",
            Screen::Lose => "lose",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Screen::Start),
            "playing" => Ok(Screen::Playing),
            "victory" => Ok(Screen::Victory),
            "lose" => Ok(Screen::Lose),
            other => Err(GameError::UnknownScreen(other.to_string())),
        }
    }
}

/// Why a run ended in [`GamePhase::Lose`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LossCause {
    /// Plane dropped below ground level.
    Ground { altitude: f32 },
    /// Plane came within collision distance of a UFO.
    UfoCollision { index: usize, distance: f32 },
    /// Plane left the play area.
    OutOfBounds,
}

impl fmt::Display for LossCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossCause::Ground { altitude } => write!(f, "hit the ground (y = {altitude:.1})"),
            LossCause::UfoCollision { index, distance } => {
                write!(f, "collided with UFO #{index} ({distance:.1} units)")
            }
            LossCause::OutOfBounds => f.write_str("left the play area"),
        }
    }
}

/// Win/lose thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Plane-to-UFO distance below which the run is lost.
    pub collision_distance: f32,
    /// Altitude below which the plane has crashed.
    pub ground_level: f32,
    /// Half width of the square play area centred on the city.
    pub world_half_extent: f32,
    /// Seconds of survival that win the mission.
    pub mission_duration: f32,
    /// Longest frame the loop will simulate, in seconds.
    pub max_frame_delta: f32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            collision_distance: 8.0,
            ground_level: 0.0,
            world_half_extent: 400.0,
            mission_duration: 120.0,
            max_frame_delta: engine_core::DEFAULT_MAX_DELTA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_parse_and_print() {
        for screen in [Screen::Start, Screen::Playing, Screen::Victory, Screen::Lose] {
            assert_eq!(screen.as_str().parse::<Screen>().ok(), Some(screen));
        }
    }

    #[test]
    fn unknown_screen_is_rejected() {
        let err = "paused".parse::<Screen>().unwrap_err();
        assert!(matches!(err, GameError::UnknownScreen(ref s) if s == "paused"));
    }

    #[test]
    fn every_phase_has_a_screen() {
        assert_eq!(GamePhase::default().screen(), Screen::Start);
        assert_eq!(GamePhase::Lose.screen(), Screen::Lose);
        assert!(GamePhase::Victory.is_finished());
        assert!(!GamePhase::Playing.is_finished());
    }
}
