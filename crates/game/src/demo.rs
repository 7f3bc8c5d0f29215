//! Scripted pilot for headless runs: presses keys on a timeline and clicks the
//! start/restart buttons the way a player would.

use input::{ElementState, InputState, KeyCode};

use crate::events::GameEvents;
use crate::state::GamePhase;

/// One scripted key transition, `at` seconds into the current attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    pub at: f32,
    pub key: KeyCode,
    pub state: ElementState,
}

impl ScriptStep {
    pub fn press(at: f32, key: KeyCode) -> Self {
        Self { at, key, state: ElementState::Pressed }
    }

    pub fn release(at: f32, key: KeyCode) -> Self {
        Self { at, key, state: ElementState::Released }
    }
}

#[derive(Debug, Clone)]
pub struct DemoPilot {
    script: Vec<ScriptStep>,
    cursor: usize,
    /// Delay before clicking start on the start screen.
    start_delay: f32,
    /// Delay before clicking restart on an end screen.
    restart_delay: f32,
    /// When the current attempt began (None until playing).
    attempt_started: Option<f32>,
    /// When the current phase was first seen.
    phase_since: f32,
    last_phase: Option<GamePhase>,
    attempts: u32,
}

impl DemoPilot {
    /// Build a pilot from a script; steps are sorted by time.
    pub fn new(mut script: Vec<ScriptStep>) -> Self {
        script.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self {
            script,
            cursor: 0,
            start_delay: 0.5,
            restart_delay: 2.0,
            attempt_started: None,
            phase_since: 0.0,
            last_phase: None,
            attempts: 0,
        }
    }

    /// Throttle up, bank left then right, glance with the orbit camera, then push the nose down.
    pub fn standard() -> Self {
        Self::new(vec![
            ScriptStep::press(1.0, KeyCode::PageUp),
            ScriptStep::release(1.6, KeyCode::PageUp),
            ScriptStep::press(3.0, KeyCode::ArrowLeft),
            ScriptStep::release(3.4, KeyCode::ArrowLeft),
            ScriptStep::press(6.0, KeyCode::ArrowRight),
            ScriptStep::release(6.4, KeyCode::ArrowRight),
            ScriptStep::press(8.0, KeyCode::KeyC),
            ScriptStep::release(8.1, KeyCode::KeyC),
            ScriptStep::press(10.0, KeyCode::KeyC),
            ScriptStep::release(10.1, KeyCode::KeyC),
            ScriptStep::press(12.0, KeyCode::ArrowUp),
            ScriptStep::release(14.0, KeyCode::ArrowUp),
        ])
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Apply everything due at `now` (seconds since the run began).
    pub fn drive(&mut self, now: f32, phase: GamePhase, input: &mut InputState, events: &mut GameEvents) {
        if self.last_phase != Some(phase) {
            self.last_phase = Some(phase);
            self.phase_since = now;
            if phase == GamePhase::Playing {
                self.attempts += 1;
                self.attempt_started = Some(now);
                self.cursor = 0;
            } else {
                self.attempt_started = None;
                input.release_all();
            }
        }

        match phase {
            GamePhase::Start => {
                if now - self.phase_since >= self.start_delay {
                    events.request_start();
                    // Wait for the phase change rather than clicking every frame.
                    self.phase_since = f32::INFINITY;
                }
            }
            GamePhase::Victory | GamePhase::Lose => {
                if now - self.phase_since >= self.restart_delay {
                    events.request_restart();
                    self.phase_since = f32::INFINITY;
                }
            }
            GamePhase::Playing => {
                let Some(started) = self.attempt_started else { return };
                let elapsed = now - started;
                while let Some(step) = self.script.get(self.cursor) {
                    if step.at > elapsed {
                        break;
                    }
                    input.process_keyboard(step.key, step.state);
                    self.cursor += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::GameEvent;

    #[test]
    fn clicks_start_once_after_delay() {
        let mut pilot = DemoPilot::standard();
        let mut input = InputState::new();
        let mut events = GameEvents::new();
        pilot.drive(0.0, GamePhase::Start, &mut input, &mut events);
        assert!(events.is_empty());
        pilot.drive(0.6, GamePhase::Start, &mut input, &mut events);
        pilot.drive(0.7, GamePhase::Start, &mut input, &mut events);
        assert_eq!(events.drain(), vec![GameEvent::StartRequested]);
    }

    #[test]
    fn replays_script_relative_to_attempt() {
        let mut pilot = DemoPilot::new(vec![
            ScriptStep::press(1.0, KeyCode::PageUp),
            ScriptStep::release(2.0, KeyCode::PageUp),
        ]);
        let mut input = InputState::new();
        let mut events = GameEvents::new();

        pilot.drive(10.0, GamePhase::Playing, &mut input, &mut events);
        pilot.drive(10.5, GamePhase::Playing, &mut input, &mut events);
        assert!(!input.is_key_held(KeyCode::PageUp));
        pilot.drive(11.0, GamePhase::Playing, &mut input, &mut events);
        assert!(input.is_key_held(KeyCode::PageUp));

        // Crash mid-script: keys are released and restart is clicked later.
        pilot.drive(11.5, GamePhase::Lose, &mut input, &mut events);
        assert!(!input.is_key_held(KeyCode::PageUp));
        pilot.drive(13.6, GamePhase::Lose, &mut input, &mut events);
        assert_eq!(events.drain(), vec![GameEvent::RestartRequested]);

        pilot.drive(14.0, GamePhase::Playing, &mut input, &mut events);
        pilot.drive(15.0, GamePhase::Playing, &mut input, &mut events);
        assert!(input.is_key_held(KeyCode::PageUp));
        assert_eq!(pilot.attempts(), 2);
    }
}
