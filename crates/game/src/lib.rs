//! Skyraid - fly a light plane over the city and keep clear of the UFOs.
//!
//! The crate is the game core: flight model, UFO fleet, camera rig and the
//! phase state machine. Rendering, UI screens and music are collaborators
//! reached through [`SceneSink`], [`UiSink`] and [`MusicPlayer`].

pub mod camera;
pub mod config;
pub mod demo;
pub mod events;
pub mod fleet;
pub mod flight;
pub mod scene;
pub mod state;
pub mod ufo;
pub mod ui;
mod update;

pub use audio::{AudioError, MusicPlayer, MusicTrack};
pub use camera::{CameraConfig, CameraMode, CameraRig, CameraView};
pub use config::{DemoConfig, GameConfig};
pub use events::{GameEvent, GameEvents};
pub use fleet::{FleetConfig, UfoFleet};
pub use flight::{FlightConfig, FlightModel, FlightState, SpeedInfo};
pub use scene::{NullScene, SceneFrame, SceneSink, UfoVisual};
pub use state::{GameError, GamePhase, LossCause, RulesConfig, Screen};
pub use ufo::{UfoAgent, UfoConfig};
pub use ui::{SpeedBand, SpeedGauge, UiSink};

use engine_core::FrameClock;
use input::{ControlAxes, ControlSampler};

/// The collaborators one tick talks to.
pub struct Collaborators<'a> {
    pub ui: &'a mut dyn UiSink,
    pub audio: &'a mut dyn MusicPlayer,
    pub scene: &'a mut dyn SceneSink,
}

/// Last values pushed to the UI, so unchanged values are not re-sent.
#[derive(Debug, Default)]
struct UiSync {
    speed: Option<SpeedInfo>,
    camera: Option<CameraMode>,
    muted: Option<bool>,
    screen: Option<Screen>,
}

/// One game session. All mutable game state lives here and is only touched from [`Game::tick`].
pub struct Game {
    config: GameConfig,
    phase: GamePhase,
    clock: FrameClock,
    sampler: ControlSampler,
    plane: FlightModel,
    fleet: UfoFleet,
    camera: CameraRig,
    events: GameEvents,
    /// Seconds survived in the current run.
    mission_time: f32,
    last_axes: ControlAxes,
    last_loss: Option<LossCause>,
    ui_sync: UiSync,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let plane = FlightModel::new(config.flight.clone(), config.controls.initial_throttle);
        let camera = CameraRig::new(config.camera.clone(), &plane.transform());
        let sampler = ControlSampler::new(config.controls.clone());
        let last_axes = ControlAxes { throttle: sampler.throttle(), ..Default::default() };
        Self {
            phase: GamePhase::Start,
            clock: FrameClock::new(config.rules.max_frame_delta),
            sampler,
            fleet: UfoFleet::new(config.fleet.clone(), config.ufo),
            plane,
            camera,
            events: GameEvents::new(),
            mission_time: 0.0,
            last_axes,
            last_loss: None,
            ui_sync: UiSync::default(),
            config,
        }
    }

    /// Put plane, controls, camera and fleet back to their starting state.
    fn reset_world(&mut self) {
        self.plane.reset();
        self.sampler.reset();
        self.fleet.reset();
        self.camera.reset(&self.plane.transform());
        self.mission_time = 0.0;
        self.last_loss = None;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn plane(&self) -> &FlightModel {
        &self.plane
    }

    pub fn fleet(&self) -> &UfoFleet {
        &self.fleet
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn mission_time(&self) -> f32 {
        self.mission_time
    }

    /// Axes sampled on the last tick.
    pub fn last_axes(&self) -> ControlAxes {
        self.last_axes
    }

    /// Why the last run was lost, while in [`GamePhase::Lose`].
    pub fn last_loss(&self) -> Option<LossCause> {
        self.last_loss
    }

    /// Queue for start/restart requests from the UI.
    pub fn events_mut(&mut self) -> &mut GameEvents {
        &mut self.events
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Build the renderer snapshot for the current state.
    pub fn scene_frame(&self) -> SceneFrame {
        SceneFrame {
            plane: self.plane.transform(),
            propeller_angle: self.plane.propeller_angle(),
            ufos: self
                .fleet
                .iter()
                .map(|ufo| UfoVisual {
                    transform: ufo.transform(),
                    beam_intensity: ufo.beam_intensity(),
                })
                .collect(),
            camera: self.camera.view(),
        }
    }
}
