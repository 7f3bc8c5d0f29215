//! Kira-backed music player.

use std::collections::HashMap;

use anyhow::Result;
use kira::{
    manager::{backend::DefaultBackend, AudioManager, AudioManagerSettings},
    sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings},
    tween::Tween,
};

use crate::{AudioConfig, AudioError, MusicPlayer, MusicTrack};

/// Main audio system: owns the output device and the decoded music tracks.
pub struct AudioSystem {
    manager: AudioManager,
    tracks: HashMap<MusicTrack, StaticSoundData>,
    current: Option<(MusicTrack, StaticSoundHandle)>,
    muted: bool,
    master_volume: f64,
}

impl AudioSystem {
    /// Open the default output device and load every configured track.
    ///
    /// A track that fails to load is skipped with a warning; asking to play it
    /// later reports [`AudioError::TrackNotLoaded`].
    pub fn new(config: &AudioConfig) -> Result<Self> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())?;

        let mut tracks = HashMap::new();
        for (kind, track) in config.resolved_tracks() {
            match StaticSoundData::from_file(&track.path) {
                Ok(data) => {
                    let mut settings = StaticSoundSettings::new().volume(track.volume);
                    if track.looping {
                        settings = settings.loop_region(..);
                    }
                    tracks.insert(kind, data.with_settings(settings));
                    log::info!("Loaded {} music from {:?}", kind, track.path);
                }
                Err(e) => log::warn!("Could not load {} music from {:?}: {}", kind, track.path, e),
            }
        }

        let mut system = Self {
            manager,
            tracks,
            current: None,
            muted: false,
            master_volume: config.master_volume.clamp(0.0, 1.0),
        };
        system.apply_volume();
        Ok(system)
    }

    /// Track currently playing, if any.
    pub fn current(&self) -> Option<MusicTrack> {
        self.current.as_ref().map(|(track, _)| *track)
    }

    /// Set master volume (0.0 to 1.0). Takes effect immediately unless muted.
    pub fn set_master_volume(&mut self, volume: f64) {
        self.master_volume = volume.clamp(0.0, 1.0);
        self.apply_volume();
    }

    fn apply_volume(&mut self) {
        let volume = if self.muted { 0.0 } else { self.master_volume };
        let _ = self.manager.main_track().set_volume(volume, Tween::default());
    }
}

impl MusicPlayer for AudioSystem {
    fn play_track(&mut self, track: MusicTrack) -> Result<(), AudioError> {
        self.stop();
        // Muting only silences the main track, so unmuting resumes the music.
        let data = self
            .tracks
            .get(&track)
            .cloned()
            .ok_or(AudioError::TrackNotLoaded(track))?;
        let handle = self
            .manager
            .play(data)
            .map_err(|e| AudioError::Playback(format!("{e:?}")))?;
        self.current = Some((track, handle));
        Ok(())
    }

    fn stop(&mut self) {
        if let Some((_, mut handle)) = self.current.take() {
            let _ = handle.stop(Tween::default());
        }
    }

    fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.apply_volume();
        self.muted
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}
