//! Music playback for the game's state screens.
//!
//! The game only ever asks for one of three tracks and a mute toggle, so the
//! boundary is the small [`MusicPlayer`] trait. [`AudioSystem`] implements it
//! on top of Kira; [`SilentPlayer`] stands in when no audio device exists.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod system;

pub use system::AudioSystem;

/// Which piece of music to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MusicTrack {
    /// Looping in-flight music.
    Background,
    /// One-shot sting on mission complete.
    Victory,
    /// One-shot sting on crash.
    Lose,
}

impl MusicTrack {
    pub const ALL: [MusicTrack; 3] = [MusicTrack::Background, MusicTrack::Victory, MusicTrack::Lose];

    pub fn as_str(self) -> &'static str {
        match self {
            MusicTrack::Background => "background",
            MusicTrack::Victory => "victory",
            MusicTrack::Lose => "lose",
        }
    }
}

impl fmt::Display for MusicTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MusicTrack {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "background" => Ok(MusicTrack::Background),
            "victory" => Ok(MusicTrack::Victory),
            "lose" => Ok(MusicTrack::Lose),
            other => Err(AudioError::UnknownTrack(other.to_string())),
        }
    }
}

/// Errors reported by music players. None of them are fatal to the game.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("unknown music track `{0}`")]
    UnknownTrack(String),
    #[error("music track `{0}` is not loaded")]
    TrackNotLoaded(MusicTrack),
    #[error("playback failed: {0}")]
    Playback(String),
}

/// The audio collaborator as seen from the game loop. Calls are fire-and-forget.
pub trait MusicPlayer {
    /// Stop whatever is playing and start `track` from the beginning.
    fn play_track(&mut self, track: MusicTrack) -> Result<(), AudioError>;

    /// Stop the current track, if any.
    fn stop(&mut self);

    /// Flip the mute flag and return the new state (true = muted).
    fn toggle_mute(&mut self) -> bool;

    fn is_muted(&self) -> bool;
}

/// A player with no output device. Tracks what would be playing.
#[derive(Debug, Default)]
pub struct SilentPlayer {
    current: Option<MusicTrack>,
    muted: bool,
}

impl SilentPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<MusicTrack> {
        self.current
    }
}

impl MusicPlayer for SilentPlayer {
    fn play_track(&mut self, track: MusicTrack) -> Result<(), AudioError> {
        self.current = Some(track);
        Ok(())
    }

    fn stop(&mut self) {
        self.current = None;
    }

    fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

/// One music file and how to play it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackConfig {
    pub path: PathBuf,
    #[serde(default = "default_track_volume")]
    pub volume: f64,
    #[serde(default)]
    pub looping: bool,
}

fn default_track_volume() -> f64 {
    0.6
}

/// Audio settings, keyed by track name (`background`, `victory`, `lose`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_tracks")]
    pub tracks: BTreeMap<String, TrackConfig>,
    /// Main track volume when not muted (0.0 to 1.0).
    #[serde(default = "default_master_volume")]
    pub master_volume: f64,
}

fn default_master_volume() -> f64 {
    1.0
}

fn default_tracks() -> BTreeMap<String, TrackConfig> {
    let mut tracks = BTreeMap::new();
    tracks.insert(
        "background".to_string(),
        TrackConfig { path: PathBuf::from("audio/background_music.mp3"), volume: 0.5, looping: true },
    );
    tracks.insert(
        "victory".to_string(),
        TrackConfig { path: PathBuf::from("audio/victory_music.mp3"), volume: 0.6, looping: false },
    );
    tracks.insert(
        "lose".to_string(),
        TrackConfig { path: PathBuf::from("audio/lose_music.mp3"), volume: 0.6, looping: false },
    );
    tracks
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            tracks: default_tracks(),
            master_volume: default_master_volume(),
        }
    }
}

impl AudioConfig {
    /// Configured tracks with recognised names. Unknown names are logged and skipped.
    pub fn resolved_tracks(&self) -> Vec<(MusicTrack, &TrackConfig)> {
        self.tracks
            .iter()
            .filter_map(|(name, track)| match name.parse::<MusicTrack>() {
                Ok(kind) => Some((kind, track)),
                Err(e) => {
                    log::error!("Skipping audio config entry: {e}");
                    None
                }
            })
            .collect()
    }
}

// Re-export for convenience
pub use kira;
