//! Game loop scenarios driven through recording collaborators.

use game::{
    AudioError, CameraMode, Collaborators, FleetConfig, Game, GameConfig, GameError, GameEvent, GamePhase,
    LossCause, MusicPlayer, MusicTrack, SceneFrame, SceneSink, Screen, SpeedInfo, UfoFleet, UiSink,
};
use glam::Vec3;
use input::{ElementState, InputState, KeyCode};

const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Default)]
struct RecordingUi {
    screens: Vec<Screen>,
    speeds: Vec<SpeedInfo>,
    camera_modes: Vec<CameraMode>,
    mute: Vec<bool>,
    screen_failures_left: usize,
    screen_attempts: usize,
}

impl UiSink for RecordingUi {
    fn update_speed(&mut self, speed: SpeedInfo) {
        self.speeds.push(speed);
    }

    fn update_camera_mode(&mut self, mode: CameraMode) {
        self.camera_modes.push(mode);
    }

    fn update_mute_status(&mut self, muted: bool) {
        self.mute.push(muted);
    }

    fn show_screen(&mut self, screen: Screen) -> Result<(), GameError> {
        self.screen_attempts += 1;
        if self.screen_failures_left > 0 {
            self.screen_failures_left -= 1;
            return Err(GameError::ScreenUnavailable(screen, "not mounted yet".to_string()));
        }
        self.screens.push(screen);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingAudio {
    played: Vec<MusicTrack>,
    muted: bool,
    broken: bool,
}

impl MusicPlayer for RecordingAudio {
    fn play_track(&mut self, track: MusicTrack) -> Result<(), AudioError> {
        if self.broken {
            return Err(AudioError::TrackNotLoaded(track));
        }
        self.played.push(track);
        Ok(())
    }

    fn stop(&mut self) {}

    fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

#[derive(Default)]
struct RecordingScene {
    frames: usize,
    last: Option<SceneFrame>,
}

impl SceneSink for RecordingScene {
    fn present(&mut self, frame: &SceneFrame) {
        self.frames += 1;
        self.last = Some(frame.clone());
    }
}

struct Harness {
    game: Game,
    ui: RecordingUi,
    audio: RecordingAudio,
    scene: RecordingScene,
    input: InputState,
    now_ms: f64,
}

impl Harness {
    fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
            ui: RecordingUi::default(),
            audio: RecordingAudio::default(),
            scene: RecordingScene::default(),
            input: InputState::new(),
            now_ms: 0.0,
        }
    }

    fn tick_at(&mut self, now_ms: f64) -> GamePhase {
        let mut out = Collaborators {
            ui: &mut self.ui,
            audio: &mut self.audio,
            scene: &mut self.scene,
        };
        let phase = self.game.tick(now_ms, &self.input, &mut out);
        self.input.begin_frame();
        phase
    }

    fn tick(&mut self) -> GamePhase {
        self.now_ms += FRAME_MS;
        self.tick_at(self.now_ms)
    }

    /// Tick without advancing the clock (dt = 0).
    fn tick_frozen(&mut self) -> GamePhase {
        self.tick_at(self.now_ms)
    }

    fn run(&mut self, seconds: f64) -> GamePhase {
        let frames = (seconds * 60.0).round() as usize;
        let mut phase = self.game.phase();
        for _ in 0..frames {
            phase = self.tick();
        }
        phase
    }

    fn start(&mut self) -> GamePhase {
        self.game.push_event(GameEvent::StartRequested);
        self.tick()
    }

    fn press(&mut self, key: KeyCode) {
        self.input.process_keyboard(key, ElementState::Pressed);
    }

    fn release(&mut self, key: KeyCode) {
        self.input.process_keyboard(key, ElementState::Released);
    }
}

/// A single UFO parked just ahead of the spawn point.
fn ufo_ahead_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.fleet = FleetConfig {
        slots: vec![Vec3::new(0.0, 100.0, -195.0)],
        ..Default::default()
    };
    config
}

/// Spawn a metre off the ground, nose well down.
fn low_spawn_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.flight.spawn_position = Vec3::new(0.0, 1.0, -200.0);
    config.flight.spawn_pitch = 0.5;
    config
}

#[test]
fn first_tick_publishes_initial_ui_once() {
    let mut h = Harness::new(GameConfig::default());
    for _ in 0..10 {
        assert_eq!(h.tick(), GamePhase::Start);
    }
    assert_eq!(h.ui.screens, vec![Screen::Start]);
    assert_eq!(h.ui.speeds.len(), 1);
    assert!((h.ui.speeds[0].current - 34.0).abs() < 1e-4);
    assert_eq!(h.ui.camera_modes, vec![CameraMode::Follow]);
    assert_eq!(h.ui.mute, vec![false]);
    assert_eq!(h.scene.frames, 10);
    assert!(h.audio.played.is_empty());
}

#[test]
fn plane_is_parked_until_start() {
    let mut h = Harness::new(GameConfig::default());
    let spawn = h.game.plane().position();
    h.press(KeyCode::ArrowUp);
    h.run(1.0);
    assert_eq!(h.game.plane().position(), spawn);

    let ufo_before = h.game.fleet().get(0).map(|u| u.position().x);
    h.run(0.5);
    assert_ne!(h.game.fleet().get(0).map(|u| u.position().x), ufo_before);
}

#[test]
fn collision_ignored_on_start_screen_but_fatal_in_play() {
    let mut h = Harness::new(ufo_ahead_config());
    for _ in 0..10 {
        assert_eq!(h.tick(), GamePhase::Start);
        let plane = h.game.plane().position();
        assert!(h.game.fleet().first_collision(plane, 8.0).is_some());
    }

    assert_eq!(h.start(), GamePhase::Lose);
    assert!(matches!(h.game.last_loss(), Some(LossCause::UfoCollision { index: 0, distance }) if distance < 8.0));
    assert_eq!(h.audio.played, vec![MusicTrack::Background, MusicTrack::Lose]);
    assert_eq!(h.ui.screens, vec![Screen::Start, Screen::Lose]);
}

#[test]
fn flying_into_the_ground_loses() {
    let mut h = Harness::new(low_spawn_config());
    assert_eq!(h.start(), GamePhase::Playing);
    assert_eq!(h.run(1.0), GamePhase::Lose);
    assert!(matches!(h.game.last_loss(), Some(LossCause::Ground { altitude }) if altitude < 0.0));
}

#[test]
fn leaving_the_play_area_loses() {
    let mut config = GameConfig::default();
    config.rules.world_half_extent = 150.0;
    let mut h = Harness::new(config);
    assert_eq!(h.start(), GamePhase::Lose);
    assert_eq!(h.game.last_loss(), Some(LossCause::OutOfBounds));
}

#[test]
fn surviving_the_mission_wins() {
    let mut config = GameConfig::default();
    config.rules.mission_duration = 1.0;
    let mut h = Harness::new(config);
    h.start();
    assert_eq!(h.run(1.5), GamePhase::Victory);
    assert_eq!(h.audio.played, vec![MusicTrack::Background, MusicTrack::Victory]);
    assert_eq!(h.ui.screens.last(), Some(&Screen::Victory));

    // Nothing moves the plane once the mission is over.
    let parked = h.game.plane().position();
    h.run(0.5);
    assert_eq!(h.game.plane().position(), parked);
    assert_eq!(h.game.phase(), GamePhase::Victory);
}

#[test]
fn restart_rebuilds_canonical_world() {
    let config = low_spawn_config();
    let mut h = Harness::new(config.clone());
    h.start();
    h.press(KeyCode::PageUp);
    h.press(KeyCode::ArrowLeft);
    assert_eq!(h.run(2.0), GamePhase::Lose);
    h.release(KeyCode::PageUp);
    h.release(KeyCode::ArrowLeft);

    h.game.push_event(GameEvent::RestartRequested);
    assert_eq!(h.tick_frozen(), GamePhase::Playing);

    let fresh = Game::new(config.clone());
    assert_eq!(h.game.plane().state(), fresh.plane().state());
    assert_eq!(h.game.mission_time(), 0.0);
    assert_eq!(h.game.last_loss(), None);
    assert!((h.game.last_axes().throttle - 0.6).abs() < 1e-6);

    let canonical = UfoFleet::new(config.fleet.clone(), config.ufo);
    assert_eq!(h.game.fleet().len(), canonical.len());
    for (live, expected) in h.game.fleet().iter().zip(canonical.iter()) {
        assert_eq!(live.position(), expected.position());
        assert_eq!(live.horizontal_speed(), expected.horizontal_speed());
    }
    assert_eq!(
        h.audio.played,
        vec![MusicTrack::Background, MusicTrack::Lose, MusicTrack::Background]
    );
}

#[test]
fn restart_tick_flies_with_starting_controls() {
    let config = low_spawn_config();
    let mut h = Harness::new(config.clone());
    h.start();
    h.press(KeyCode::PageUp);
    h.press(KeyCode::ArrowLeft);
    assert_eq!(h.run(2.0), GamePhase::Lose);
    h.release(KeyCode::PageUp);
    h.release(KeyCode::ArrowLeft);

    h.game.push_event(GameEvent::RestartRequested);
    assert_eq!(h.tick(), GamePhase::Playing);

    // The run's full throttle and left bank must not carry into the new plane.
    let fresh = Game::new(config);
    assert_eq!(h.game.plane().speed_info(), fresh.plane().speed_info());
    let (_, roll, yaw) = h.game.plane().angles();
    assert_eq!(roll, 0.0);
    assert_eq!(yaw, 0.0);
    let axes = h.game.last_axes();
    assert!((axes.throttle - 0.6).abs() < 1e-6);
    assert_eq!(axes.roll, 0.0);
}

#[test]
fn reported_axes_respect_throttle_floor() {
    let mut h = Harness::new(GameConfig::default());
    assert!((h.game.last_axes().throttle - 0.6).abs() < 1e-6);
    h.tick();
    h.start();
    assert!((h.game.last_axes().throttle - 0.6).abs() < 1e-6);
    h.press(KeyCode::PageDown);
    h.run(3.0);
    assert!(h.game.last_axes().throttle >= 0.2);
}

#[test]
fn events_only_apply_in_their_phase() {
    let mut h = Harness::new(GameConfig::default());
    h.game.push_event(GameEvent::RestartRequested);
    assert_eq!(h.tick(), GamePhase::Start);

    h.start();
    h.run(0.5);
    let time = h.game.mission_time();
    h.game.push_event(GameEvent::StartRequested);
    h.game.push_event(GameEvent::RestartRequested);
    assert_eq!(h.tick(), GamePhase::Playing);
    assert!(h.game.mission_time() > time);
    assert_eq!(h.audio.played, vec![MusicTrack::Background]);
}

#[test]
fn held_toggles_fire_once_per_press() {
    let mut h = Harness::new(GameConfig::default());
    h.start();

    h.press(KeyCode::KeyC);
    h.press(KeyCode::KeyM);
    h.run(0.5);
    assert_eq!(h.game.camera().mode(), CameraMode::Orbit);
    assert!(h.audio.muted);
    assert_eq!(h.ui.camera_modes, vec![CameraMode::Follow, CameraMode::Orbit]);
    assert_eq!(h.ui.mute, vec![false, true]);

    h.release(KeyCode::KeyC);
    h.release(KeyCode::KeyM);
    h.tick();
    h.press(KeyCode::KeyC);
    h.run(0.25);
    assert_eq!(h.game.camera().mode(), CameraMode::Follow);
    assert_eq!(h.ui.camera_modes.len(), 3);
    assert_eq!(h.ui.mute, vec![false, true]);
}

#[test]
fn backwards_timestamps_do_not_rewind_flight() {
    let mut h = Harness::new(GameConfig::default());
    h.start();
    h.run(0.5);
    let position = h.game.plane().position();
    let now = h.now_ms;

    h.tick_at(now - 200.0);
    assert_eq!(h.game.plane().position(), position);
    h.tick_at(f64::NAN);
    assert_eq!(h.game.plane().position(), position);
}

#[test]
fn collaborator_failures_are_not_fatal() {
    let mut h = Harness::new(GameConfig::default());
    h.audio.broken = true;
    h.ui.screen_failures_left = 1;

    h.tick();
    assert!(h.ui.screens.is_empty());
    h.tick();
    assert_eq!(h.ui.screens, vec![Screen::Start]);
    assert_eq!(h.ui.screen_attempts, 2);

    assert_eq!(h.start(), GamePhase::Playing);
    assert!(h.audio.played.is_empty());
}

#[test]
fn scene_frame_tracks_every_entity() {
    let mut h = Harness::new(GameConfig::default());
    h.start();
    h.run(0.2);
    let frame = h.scene.last.clone().expect("frame presented");
    assert_eq!(frame.ufos.len(), 5);
    assert_eq!(frame.instances().len(), 6);
    assert_eq!(frame.plane.position, h.game.plane().position());
    assert!(frame.ufos.iter().all(|u| (1.0..=5.0).contains(&u.beam_intensity)));
    // Chase camera sits behind the plane.
    assert!(frame.camera.eye.z < frame.plane.position.z);
}
