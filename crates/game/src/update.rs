//! Per-frame game logic: input, phase transitions, simulation and collaborator output.

use input::{ControlAxes, InputState};

use crate::state::{GamePhase, LossCause};
use crate::{Collaborators, Game, GameEvent, MusicTrack};

impl Game {
    /// Run one frame. `timestamp_ms` is the scheduler's wall clock; the delta is derived here.
    pub fn tick(&mut self, timestamp_ms: f64, input: &InputState, out: &mut Collaborators<'_>) -> GamePhase {
        let dt = self.clock.advance(timestamp_ms);

        // Start/restart resets the sampler, so it runs before this tick's sample.
        self.process_events(out);
        let axes = self.sampler.sample(input, dt);
        self.last_axes = axes;
        self.handle_toggles(&axes, out);

        if self.phase == GamePhase::Playing {
            self.plane.update(&axes, dt);
            self.mission_time += dt;
        }

        // UFOs keep patrolling behind the menu screens.
        self.fleet.update(dt);

        if self.phase == GamePhase::Playing {
            self.evaluate_rules(out);
        }

        self.camera.update(&self.plane.transform());
        out.scene.present(&self.scene_frame());
        self.sync_ui(out);

        self.phase
    }

    fn handle_toggles(&mut self, axes: &ControlAxes, out: &mut Collaborators<'_>) {
        if axes.camera_toggle_edge {
            let mode = self.camera.toggle(&self.plane.transform());
            log::debug!("Camera mode: {}", mode);
        }
        if axes.mute_toggle_edge {
            let muted = out.audio.toggle_mute();
            log::debug!("Sound {}", if muted { "off" } else { "on" });
        }
    }

    fn process_events(&mut self, out: &mut Collaborators<'_>) {
        for event in self.events.drain() {
            match (event, self.phase) {
                (GameEvent::StartRequested, GamePhase::Start) => {
                    log::info!("Mission start");
                    self.enter_playing(out);
                }
                (GameEvent::RestartRequested, phase) if phase.is_finished() => {
                    log::info!("Restarting after {:?}", phase);
                    self.enter_playing(out);
                }
                (event, phase) => log::debug!("Ignoring {:?} during {:?}", event, phase),
            }
        }
    }

    fn enter_playing(&mut self, out: &mut Collaborators<'_>) {
        self.reset_world();
        self.phase = GamePhase::Playing;
        play(out, MusicTrack::Background);
    }

    /// Loss and victory checks, run only while playing.
    fn evaluate_rules(&mut self, out: &mut Collaborators<'_>) {
        let rules = &self.config.rules;
        let position = self.plane.position();

        let loss = if position.y < rules.ground_level {
            Some(LossCause::Ground { altitude: position.y })
        } else if let Some(index) = self.fleet.first_collision(position, rules.collision_distance) {
            let distance = self
                .fleet
                .get(index)
                .map(|ufo| ufo.position().distance(position))
                .unwrap_or_default();
            Some(LossCause::UfoCollision { index, distance })
        } else if position.x.abs() > rules.world_half_extent || position.z.abs() > rules.world_half_extent {
            Some(LossCause::OutOfBounds)
        } else {
            None
        };

        if let Some(cause) = loss {
            log::info!("Plane lost: {} after {:.1}s", cause, self.mission_time);
            self.last_loss = Some(cause);
            self.phase = GamePhase::Lose;
            play(out, MusicTrack::Lose);
        } else if self.mission_time >= rules.mission_duration {
            log::info!("Mission complete after {:.1}s", self.mission_time);
            self.phase = GamePhase::Victory;
            play(out, MusicTrack::Victory);
        }
    }

    /// Push UI values that changed since the last tick.
    fn sync_ui(&mut self, out: &mut Collaborators<'_>) {
        let screen = self.phase.screen();
        if self.ui_sync.screen != Some(screen) {
            match out.ui.show_screen(screen) {
                Ok(()) => self.ui_sync.screen = Some(screen),
                // Left unset so the screen is requested again next tick.
                Err(e) => log::error!("UI: {}", e),
            }
        }

        let speed = self.plane.speed_info();
        if self.ui_sync.speed != Some(speed) {
            out.ui.update_speed(speed);
            self.ui_sync.speed = Some(speed);
        }

        let mode = self.camera.mode();
        if self.ui_sync.camera != Some(mode) {
            out.ui.update_camera_mode(mode);
            self.ui_sync.camera = Some(mode);
        }

        let muted = out.audio.is_muted();
        if self.ui_sync.muted != Some(muted) {
            out.ui.update_mute_status(muted);
            self.ui_sync.muted = Some(muted);
        }
    }
}

/// Fire-and-forget track change; failures are reported and play continues.
fn play(out: &mut Collaborators<'_>, track: MusicTrack) {
    if let Err(e) = out.audio.play_track(track) {
        log::error!("Audio: {}", e);
    }
}
